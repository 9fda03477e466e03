//! Ui domain: tests for panel stacking and the contact simulation.

use std::time::Duration;

use super::contact::{ACK_SECONDS, ContactForm};
use super::{UiPanels, close_topmost};

#[test]
fn test_escape_closes_map_before_help() {
    let mut panels = UiPanels {
        map_open: true,
        help_open: true,
    };
    close_topmost(&mut panels);
    assert!(!panels.map_open);
    assert!(panels.help_open);
    close_topmost(&mut panels);
    assert!(!panels.help_open);
    // A third escape with nothing open is a no-op.
    close_topmost(&mut panels);
    assert!(!panels.map_open && !panels.help_open);
}

#[test]
fn test_contact_acknowledgment_expires() {
    let mut form = ContactForm::default();
    assert!(!form.acknowledging());

    form.send();
    assert!(form.acknowledging());

    let timer = form.ack.as_mut().expect("send arms the timer");
    timer.tick(Duration::from_secs_f32(ACK_SECONDS - 0.5));
    assert!(!timer.just_finished());

    let timer = form.ack.as_mut().expect("still armed");
    assert!(timer.tick(Duration::from_secs_f32(0.6)).just_finished());
}

#[test]
fn test_resend_rearms_the_timer() {
    let mut form = ContactForm::default();
    form.send();
    if let Some(timer) = form.ack.as_mut() {
        timer.tick(Duration::from_secs_f32(2.9));
    }
    form.send();
    let timer = form.ack.as_ref().expect("rearmed");
    assert_eq!(timer.elapsed_secs(), 0.0);
}
