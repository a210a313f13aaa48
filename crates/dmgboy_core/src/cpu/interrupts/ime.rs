use super::super::Cpu;

/// Ticks between an EI/DI and the moment its IME change may be applied: one
/// more than the cheapest instruction, so at least one further instruction
/// completes first.
pub(crate) const IME_DELAY_TICKS: u64 = 5;

const CAPACITY: usize = 4;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct ImeChange {
    pub(crate) enable: bool,
    /// The change is applied once the clock has moved past this tick.
    pub(crate) due: u64,
}

/// Fixed-capacity FIFO of pending IME changes.
///
/// At most one or two entries are live in practice (EI immediately followed
/// by DI, or the reverse).
#[derive(Clone, Debug, Default)]
pub(crate) struct ImeQueue {
    slots: [ImeChange; CAPACITY],
    head: usize,
    len: usize,
}

impl ImeQueue {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }

    pub(crate) fn push(&mut self, change: ImeChange) {
        if self.len == CAPACITY {
            let dropped = self.slots[self.head];
            log::warn!("GB CPU IME queue full, dropping oldest change {dropped:?}");
            self.head = (self.head + 1) % CAPACITY;
            self.len -= 1;
        }
        let tail = (self.head + self.len) % CAPACITY;
        self.slots[tail] = change;
        self.len += 1;
    }

    /// Remove and return the head entry if `clock` has moved past its due
    /// tick. Later entries are never applied before earlier ones.
    pub(crate) fn pop_due(&mut self, clock: u64) -> Option<ImeChange> {
        if self.is_empty() {
            return None;
        }
        let head = self.slots[self.head];
        if clock <= head.due {
            return None;
        }
        self.head = (self.head + 1) % CAPACITY;
        self.len -= 1;
        Some(head)
    }
}

impl Cpu {
    /// Queue an IME change requested by EI (`true`) or DI (`false`).
    ///
    /// Called while the requesting instruction executes, before its cost is
    /// added to the clock.
    pub(in crate::cpu) fn schedule_ime(&mut self, enable: bool) {
        let due = self.clock + IME_DELAY_TICKS;
        self.ime_queue.push(ImeChange { enable, due });
    }

    /// Apply the oldest queued IME change if it is due.
    pub(in crate::cpu) fn apply_due_ime_change(&mut self) -> bool {
        match self.ime_queue.pop_due(self.clock) {
            Some(change) => {
                log::debug!(
                    "GB CPU IME <- {} at clock={} (due {})",
                    change.enable,
                    self.clock,
                    change.due
                );
                self.ime = change.enable;
                true
            }
            None => false,
        }
    }
}
