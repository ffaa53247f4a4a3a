//! Trace record types
//!
//! `EventRecord` is the unit of data produced by instrumented call sites and
//! consumed by the writer thread. Records are recycled through a pool, so a
//! freshly acquired record carries stale fields from its previous use; every
//! acquisition site must fully reinitialize it (see [`EventRecord::reset`]).

/// Kind of trace event (determines the wire tag and payload layout)
///
/// NOTE: The tag strings are parsed by downstream visualization tools and
/// must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EventKind {
    /// Function entry (start of an execution bar)
    FuncEnter = 0,
    /// Function exit (end of an execution bar)
    FuncExit = 1,
    /// Phase change within the current scope
    Phase = 2,
    /// Message send marker (start of a communication arrow)
    Send = 3,
    /// Message receive marker (end of a communication arrow)
    Recv = 4,
    /// Free-text comment (ignored by the timeline layout)
    Comment = 5,
    /// Free-text information marker
    Info = 6,
    /// Free-text event marker (rendered as a point on the timeline)
    Event = 7,
    /// Thread naming (does not occupy a timeline slot)
    ThreadName = 8,
    /// Explicit terminate marker
    Terminate = 9,
    /// Internal drain sentinel; never emitted on the wire
    Shutdown = 10,
}

impl EventKind {
    /// Wire tag for this kind
    ///
    /// `Shutdown` is internal-only and has no tag; [`crate::encode_record`]
    /// rejects it.
    #[inline]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::FuncEnter => "CAL",
            Self::FuncExit => "RET",
            Self::Phase => "PHS",
            Self::Send => "SND",
            Self::Recv => "RCV",
            Self::Comment => "#",
            Self::Info => "INF",
            Self::Event => "EVT",
            Self::ThreadName => "TNM",
            Self::Terminate => "TRM",
            Self::Shutdown => "",
        }
    }

    /// Whether this kind has a wire representation
    #[inline]
    pub const fn is_emitted(self) -> bool {
        !matches!(self, Self::Shutdown)
    }

    /// Payload-presence flags implied by this kind
    #[inline]
    pub const fn flags(self) -> RecordFlags {
        match self {
            Self::FuncEnter | Self::FuncExit | Self::Phase => RecordFlags::HAS_NAME,
            Self::Send | Self::Recv => RecordFlags::HAS_VALUE,
            Self::Comment | Self::Info | Self::Event => RecordFlags::HAS_TEXT,
            Self::ThreadName => RecordFlags::HAS_TEXT.union(RecordFlags::NO_TIMESTAMP),
            Self::Terminate | Self::Shutdown => RecordFlags::NONE,
        }
    }

    /// Human-readable name of this kind (for diagnostics, not the wire)
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FuncEnter => "func_enter",
            Self::FuncExit => "func_exit",
            Self::Phase => "phase",
            Self::Send => "send",
            Self::Recv => "recv",
            Self::Comment => "comment",
            Self::Info => "info",
            Self::Event => "event",
            Self::ThreadName => "thread_name",
            Self::Terminate => "terminate",
            Self::Shutdown => "shutdown",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payload-presence bitmask for a record
///
/// The flags drive which optional fields the encoder emits. They are stored
/// explicitly on the record rather than derived at encoding time so that the
/// line layout is fixed at production.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecordFlags(u8);

impl RecordFlags {
    /// No optional fields
    pub const NONE: Self = Self(0);
    /// Record carries a static `name` label
    pub const HAS_NAME: Self = Self(0x01);
    /// Record carries `value1`/`value2` identifiers
    pub const HAS_VALUE: Self = Self(0x02);
    /// Record carries an owned `text` payload
    pub const HAS_TEXT: Self = Self(0x04);
    /// Timestamp is suppressed on the wire
    pub const NO_TIMESTAMP: Self = Self(0x08);

    /// Check whether all flags in `other` are set
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Combine two flag sets
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Raw bit representation
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl std::ops::BitOr for RecordFlags {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

/// One unit of trace data
///
/// Lifecycle: created (fresh or recycled) on a write call while the engine is
/// enabled; exclusively owned by the queue from enqueue until dequeue; after
/// encoding by the writer, returned to the pool for reuse.
#[derive(Debug)]
pub struct EventRecord {
    /// Event kind (wire tag)
    pub kind: EventKind,

    /// Payload-presence flags
    pub flags: RecordFlags,

    /// Identity of the producing thread, stable for the thread's lifetime
    pub thread_id: u64,

    /// Logical timestamp, strictly increasing process-wide
    ///
    /// NOT wall-clock time: a serialized counter gives total order across
    /// threads without clock-skew artifacts.
    pub timestamp: u64,

    /// Static label (FuncEnter/FuncExit/Phase)
    pub name: &'static str,

    /// Owned text payload (Comment/Info/Event/ThreadName)
    ///
    /// The buffer's capacity survives pool recycling.
    pub text: String,

    /// First opaque identifier (Send/Recv)
    pub value1: u64,

    /// Second opaque identifier (Send/Recv); 0 for one-value markers
    pub value2: u64,
}

impl EventRecord {
    /// Create a blank record
    ///
    /// The record is in placeholder state and must be initialized with
    /// [`reset`](Self::reset) before use, exactly like a recycled one.
    pub fn new() -> Self {
        Self {
            kind: EventKind::Comment,
            flags: RecordFlags::NONE,
            thread_id: 0,
            timestamp: 0,
            name: "",
            text: String::new(),
            value1: 0,
            value2: 0,
        }
    }

    /// Reinitialize every field for a new use
    ///
    /// The pool never scrubs records on release, so this is the single place
    /// that clears stale state from the previous use. The text buffer keeps
    /// its capacity.
    #[inline]
    pub fn reset(&mut self, kind: EventKind, flags: RecordFlags) {
        self.kind = kind;
        self.flags = flags;
        self.thread_id = 0;
        self.timestamp = 0;
        self.name = "";
        self.text.clear();
        self.value1 = 0;
        self.value2 = 0;
    }
}

impl Default for EventRecord {
    fn default() -> Self {
        Self::new()
    }
}
