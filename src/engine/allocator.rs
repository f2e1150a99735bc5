/// Source of delay ring buffers.
///
/// Called only while instances are created, never from the audio path. A
/// host with a fixed memory pool refuses by returning `None`.
pub trait BufferAllocator {
    fn allocate(&mut self, samples: usize) -> Option<Box<[f32]>>;
}

/// Plain zeroed heap buffers.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeapAllocator;

impl BufferAllocator for HeapAllocator {
    fn allocate(&mut self, samples: usize) -> Option<Box<[f32]>> {
        Some(vec![0.0; samples].into_boxed_slice())
    }
}

/// Heap buffers up to a total sample budget, then refusal.
#[derive(Debug, Clone, Copy)]
pub struct BudgetAllocator {
    remaining: usize,
}

impl BudgetAllocator {
    pub fn new(samples: usize) -> Self {
        Self { remaining: samples }
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl BufferAllocator for BudgetAllocator {
    fn allocate(&mut self, samples: usize) -> Option<Box<[f32]>> {
        self.remaining = self.remaining.checked_sub(samples)?;
        HeapAllocator.allocate(samples)
    }
}
