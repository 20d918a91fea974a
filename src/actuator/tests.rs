use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use super::*;
use crate::config::AudioSettings;

fn recording_actuator(slow_mute: Duration) -> (CommandActuator, mpsc::Receiver<Vec<String>>) {
    let settings = AudioSettings::default();
    let (done_tx, done_rx) = mpsc::channel();
    let actuator = CommandActuator::with_runner(
        settings.stream_mute_command,
        settings.master_mute_command,
        move |argv: &[String]| {
            if argv.last().map(String::as_str) == Some("1") {
                thread::sleep(slow_mute);
            }
            let _ = done_tx.send(argv.to_vec());
            if argv.first().map(String::as_str) == Some("amixer") {
                return Err(Error::EmptyCommand("master"));
            }
            Ok(())
        },
    );
    (actuator, done_rx)
}

fn finished(rx: &mpsc::Receiver<Vec<String>>, count: usize) -> Vec<Vec<String>> {
    (0..count)
        .map(|_| rx.recv_timeout(Duration::from_secs(5)).unwrap())
        .collect()
}

#[test]
fn expand_fills_stream_placeholders() {
    let settings = AudioSettings::default();
    assert_eq!(
        expand(&settings.stream_mute_command, Some(17), true),
        vec!["pacmd", "set-sink-input-mute", "17", "1"]
    );
    assert_eq!(
        expand(&settings.stream_mute_command, Some(17), false),
        vec!["pacmd", "set-sink-input-mute", "17", "0"]
    );
}

#[test]
fn expand_fills_master_switch() {
    let settings = AudioSettings::default();
    assert_eq!(
        expand(&settings.master_mute_command, None, true),
        vec!["amixer", "-q", "-D", "pulse", "sset", "Master", "off"]
    );
    assert_eq!(
        expand(&settings.master_mute_command, None, false).last().map(String::as_str),
        Some("on")
    );
}

#[test]
fn expand_handles_embedded_placeholders() {
    let template = vec!["wpctl".to_string(), "set-mute".to_string(), "--id={index}:{mute}".to_string()];
    assert_eq!(expand(&template, Some(3), true)[2], "--id=3:1");
}

#[test]
fn run_reports_spawn_and_exit_failures() {
    assert!(matches!(run(&[]), Err(Error::EmptyCommand(_))));
    assert!(matches!(
        run(&["admute-no-such-program".to_string()]),
        Err(Error::Spawn { .. })
    ));
    assert!(matches!(
        run(&["sh".to_string(), "-c".to_string(), "exit 3".to_string()]),
        Err(Error::CommandFailed { .. })
    ));
    assert!(run(&["true".to_string()]).is_ok());
}

#[test]
fn commands_run_in_the_order_they_were_issued() {
    let (actuator, done) = recording_actuator(Duration::from_millis(150));

    // The slow mute must not be overtaken by the unmute issued right after it.
    actuator.mute_stream(5);
    actuator.unmute_stream(5);
    actuator.mute_stream(6);

    let settings = AudioSettings::default();
    assert_eq!(
        finished(&done, 3),
        vec![
            expand(&settings.stream_mute_command, Some(5), true),
            expand(&settings.stream_mute_command, Some(5), false),
            expand(&settings.stream_mute_command, Some(6), true),
        ]
    );
}

#[test]
fn failed_command_does_not_stop_the_worker() {
    let (actuator, done) = recording_actuator(Duration::ZERO);

    actuator.unmute_master();
    actuator.unmute_stream(9);

    let ran = finished(&done, 2);
    assert_eq!(ran[0].first().map(String::as_str), Some("amixer"));
    assert_eq!(ran[1], vec!["pacmd", "set-sink-input-mute", "9", "0"]);
}
