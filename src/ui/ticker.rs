use std::time::Duration;

use fltk::app::{self, Sender, TimeoutHandle};

use crate::app::controllers::ScrollTicker;
use crate::app::domain::Message;

/// Repeating FLTK timeout that posts `Message::ScrollTick` on the channel.
pub struct FltkTicker {
    sender: Sender<Message>,
    handle: Option<TimeoutHandle>,
}

impl FltkTicker {
    pub fn new(sender: Sender<Message>) -> Self {
        Self {
            sender,
            handle: None,
        }
    }
}

impl ScrollTicker for FltkTicker {
    fn start(&mut self, interval: Duration) {
        self.stop();
        let s = self.sender;
        let secs = interval.as_secs_f64();
        let handle = app::add_timeout3(secs, move |handle| {
            s.send(Message::ScrollTick);
            app::repeat_timeout3(secs, handle);
        });
        self.handle = Some(handle);
    }

    fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            app::remove_timeout3(handle);
        }
    }
}
