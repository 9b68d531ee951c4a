mod ack;

pub use ack::{DeleteAck, InsertAck, UpdateAck};
