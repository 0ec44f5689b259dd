pub mod clock;
pub mod random;
pub mod ticket_sink;

pub use clock::IClock;
pub use random::IRandomSource;
pub use ticket_sink::ITicketSink;
