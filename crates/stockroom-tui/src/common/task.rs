/// Identifies one remote request issued by the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

/// Identifies one lifetime of the inventory screen.
///
/// A new mount id is taken each time a session opens the inventory, so
/// results belonging to an earlier session can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MountId(pub u64);

#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_request(&mut self) -> RequestId {
        RequestId(self.bump())
    }

    pub fn next_mount(&mut self) -> MountId {
        MountId(self.bump())
    }

    fn bump(&mut self) -> u64 {
        let id = self.next;
        self.next = self.next.wrapping_add(1);
        id
    }
}
