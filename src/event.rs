//! The wedding functions expenses are usually grouped under.

/// A wedding function shown on the event overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CataloguedEvent {
    /// The event name as used in [Expense::event](crate::expense::Expense::event).
    pub name: &'static str,
    /// The emoji shown next to the event name.
    pub emoji: &'static str,
}

/// The wedding functions in the order they take place.
///
/// Expenses may use event names outside of this list.
pub const EVENTS: [CataloguedEvent; 5] = [
    CataloguedEvent {
        name: "Chheka",
        emoji: "💍",
    },
    CataloguedEvent {
        name: "Mehendi",
        emoji: "🌿",
    },
    CataloguedEvent {
        name: "Haldi",
        emoji: "🌼",
    },
    CataloguedEvent {
        name: "Wedding",
        emoji: "👰",
    },
    CataloguedEvent {
        name: "Reception",
        emoji: "🎉",
    },
];
