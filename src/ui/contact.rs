//! Ui domain: the contact page's simulated message send.
//!
//! No network involved. Pressing SEND flashes "MESSAGE SENT!" for a few
//! seconds, then the acknowledgment clears.

use bevy::prelude::*;

use super::UiPanels;

/// How long the sent acknowledgment stays on screen.
pub const ACK_SECONDS: f32 = 3.0;

/// Marker for the SEND MESSAGE button on the contact page.
#[derive(Component, Debug)]
pub struct SendButton;

/// Marker for the acknowledgment text under the button.
#[derive(Component, Debug)]
pub struct SendStatus;

/// Simulated send state.
#[derive(Resource, Debug, Default)]
pub struct ContactForm {
    pub ack: Option<Timer>,
}

impl ContactForm {
    pub fn send(&mut self) {
        self.ack = Some(Timer::from_seconds(ACK_SECONDS, TimerMode::Once));
    }

    pub fn acknowledging(&self) -> bool {
        self.ack.is_some()
    }
}

pub fn handle_send_button(
    panels: Res<UiPanels>,
    mut form: ResMut<ContactForm>,
    buttons: Query<&Interaction, (With<SendButton>, Changed<Interaction>)>,
    mut status: Query<&mut Text, With<SendStatus>>,
) {
    // The map covers the page panel while open; ignore clicks underneath it.
    if panels.map_open {
        return;
    }
    for interaction in &buttons {
        if *interaction == Interaction::Pressed {
            form.send();
            for mut text in &mut status {
                *text = Text::new("MESSAGE SENT!");
            }
            info!("Contact message simulated");
        }
    }
}

pub fn tick_acknowledgment(
    time: Res<Time>,
    mut form: ResMut<ContactForm>,
    mut status: Query<&mut Text, With<SendStatus>>,
) {
    let Some(timer) = form.ack.as_mut() else {
        return;
    };
    if timer.tick(time.delta()).just_finished() {
        form.ack = None;
        for mut text in &mut status {
            *text = Text::new("");
        }
    }
}
