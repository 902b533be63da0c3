//! Mackie HUI control surface protocol: control addressing, host message
//! decoding, surface message encoding and a mirrored model of the console.

pub mod charset;
pub mod constants;
pub mod error;
pub mod event;
pub mod message;
pub mod parameter;
pub mod parser;
pub mod state;
pub mod surface;
pub mod transmit;

pub use error::{EncodeError, ParseError};
pub use event::{HuiEvent, Side};
pub use message::HuiMessage;
pub use midly::num::u7;
pub use parameter::{ChannelParameter, Parameter, ZoneAndPort};
pub use parser::Parser;
pub use state::State;
pub use surface::Surface;
