mod reducer;
mod runtime;
mod shortcuts;

use super::super::messages::Message;
use super::super::state::{App, SIGNAL_POLL_MS, SPEECH_POLL_MS, SpeechLifecycle};
use super::playback::tick_period;
use iced::event;
use iced::time;
use iced::{Subscription, Task};
use std::time::Duration;

impl App {
    pub fn subscription(app: &App) -> Subscription<Message> {
        let mut subscriptions: Vec<Subscription<Message>> = vec![
            event::listen_with(runtime::runtime_event_to_message),
            time::every(Duration::from_millis(SIGNAL_POLL_MS)).map(Message::PollSystemSignals),
        ];

        if app.visual_running {
            subscriptions.push(time::every(tick_period(app.wpm)).map(Message::VisualTick));
        }
        if matches!(app.speech.lifecycle, SpeechLifecycle::Speaking { .. }) {
            subscriptions
                .push(time::every(Duration::from_millis(SPEECH_POLL_MS)).map(Message::SpeechPoll));
        }

        Subscription::batch(subscriptions)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let effects = self.reduce(message);
        if effects.is_empty() {
            Task::none()
        } else {
            Task::batch(effects.into_iter().map(|effect| self.run_effect(effect)))
        }
    }
}
