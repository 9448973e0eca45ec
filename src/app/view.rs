use super::messages::Message;
use super::state::{
    App, MAX_SPEECH_SPEED, MAX_SPEECH_VOLUME, MAX_WPM, MIN_SPEECH_SPEED, MIN_SPEECH_VOLUME,
    MIN_WPM, SpeechLifecycle,
};
use crate::store::ReadingMode;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Column, button, column, container, radio, row, slider, text, text_input};
use iced::{Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        if self.starter_mode {
            return self.starter_view();
        }
        self.reading_view()
    }

    /// Landing screen shown until a document is loaded.
    fn starter_view(&self) -> Element<'_, Message> {
        let path_input = text_input("Path to a plain-text file", &self.open_path_input)
            .on_input(Message::OpenPathInputChanged)
            .on_submit(Message::OpenPathSubmitted)
            .padding(8)
            .width(Length::Fixed(420.0));

        let open_button = if self.document_loading {
            button("Open")
        } else {
            button("Open").on_press(Message::OpenPathSubmitted)
        };
        let sample_button = if self.document_loading {
            button("Fetch sample text")
        } else {
            button("Fetch sample text").on_press(Message::FetchSampleRequested)
        };

        let mut content: Column<'_, Message> = column![
            text("flashread").size(40),
            text("Flash one word at a time, or let the narrator read to you."),
            path_input,
            row![open_button, sample_button].spacing(10),
        ]
        .spacing(16)
        .align_x(Horizontal::Center);

        if self.document_loading {
            content = content.push(text("Loading..."));
        }
        if let Some(error) = &self.load_error {
            content = content.push(text(error.as_str()));
        }

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into()
    }

    fn reading_view(&self) -> Element<'_, Message> {
        let play_label = if self.is_running() { "Pause" } else { "Play" };
        let play_button = button(play_label).on_press(Message::TogglePlayPause);

        let theme_label = if matches!(self.config.theme, crate::config::ThemeMode::Night) {
            "Day Mode"
        } else {
            "Night Mode"
        };
        let theme_toggle = button(theme_label).on_press(Message::ToggleTheme);
        let help_toggle = button(if self.show_help { "Hide Help" } else { "Help" })
            .on_press(Message::ToggleHelp);

        let mode_picker = row![
            radio("Visual", ReadingMode::Visual, Some(self.mode), Message::SetMode),
            radio("Speech", ReadingMode::Speech, Some(self.mode), Message::SetMode),
        ]
        .spacing(10);

        let controls = row![
            play_button,
            mode_picker,
            theme_toggle,
            help_toggle,
            text(self.reader.progress_label()),
        ]
        .spacing(10)
        .align_y(Vertical::Center)
        .width(Length::Fill);

        let word = self
            .reader
            .current_word()
            .unwrap_or_default()
            .to_string();
        let word_display = container(text(word).size(64))
            .width(Length::Fill)
            .height(Length::FillPortion(1))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center);

        let wpm_controls = row![
            text(format!("{} WPM", self.wpm)),
            button("-").on_press(Message::StepWpm(-1)),
            slider(MIN_WPM as f32..=MAX_WPM as f32, self.wpm as f32, |value| {
                Message::SetWpm(value.round() as u32)
            }),
            button("+").on_press(Message::StepWpm(1)),
        ]
        .spacing(10)
        .align_y(Vertical::Center)
        .width(Length::Fill);

        let mut content: Column<'_, Message> = column![controls, word_display, wpm_controls]
            .padding(16)
            .spacing(12)
            .height(Length::Fill);

        if self.mode == ReadingMode::Speech {
            content = content.push(self.speech_controls());
        }
        if let Some(error) = &self.load_error {
            content = content.push(text(error.as_str()));
        }
        if self.show_help {
            content = content.push(self.help_panel());
        }

        content.into()
    }

    fn speech_controls(&self) -> Element<'_, Message> {
        let status = match self.speech.lifecycle {
            SpeechLifecycle::Idle => "Narration idle",
            SpeechLifecycle::Preparing { .. } => "Preparing audio...",
            SpeechLifecycle::Speaking { .. } => "Speaking",
        };

        row![
            text(status),
            column![
                text(format!("Speed: {:.2}x", self.config.speech_speed)),
                slider(
                    MIN_SPEECH_SPEED..=MAX_SPEECH_SPEED,
                    self.config.speech_speed,
                    Message::SetSpeechSpeed,
                )
                .step(0.05)
            ]
            .spacing(4)
            .width(Length::FillPortion(1)),
            column![
                text(format!("Volume: {:.0}%", self.config.speech_volume * 100.0)),
                slider(
                    MIN_SPEECH_VOLUME..=MAX_SPEECH_VOLUME,
                    self.config.speech_volume,
                    Message::SetSpeechVolume,
                )
                .step(0.01)
            ]
            .spacing(4)
            .width(Length::FillPortion(1)),
        ]
        .spacing(12)
        .align_y(Vertical::Center)
        .width(Length::Fill)
        .into()
    }

    fn help_panel(&self) -> Element<'_, Message> {
        let binding = |action: &str, key: &str| text(format!("{action}: {key}"));
        column![
            text("Keyboard shortcuts").size(20),
            binding("Play / pause", &self.config.key_toggle_play_pause),
            binding("Back one word", &self.config.key_jump_back),
            binding("Forward one word", &self.config.key_jump_forward),
            binding("Back ten words", &self.config.key_jump_back_far),
            binding("Forward ten words", &self.config.key_jump_forward_far),
            binding("Speed up", &self.config.key_speed_up),
            binding("Slow down", &self.config.key_speed_down),
            binding("Switch mode", &self.config.key_toggle_mode),
            binding("Switch theme", &self.config.key_toggle_theme),
            binding("Toggle this help", &self.config.key_toggle_help),
            binding("Quit", &self.config.key_safe_quit),
        ]
        .spacing(4)
        .into()
    }
}
