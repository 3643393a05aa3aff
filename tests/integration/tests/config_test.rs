use refwalk::{DfsWalker, Iter, IterConfig, Walker, impl_record};

struct Envelope {
    pub id: u32,
    pub inbox: crossbeam_channel::Receiver<String>,
    note: String,
}

impl_record!(Envelope { pub id, pub inbox, note });

fn envelope() -> Envelope {
    let (tx, rx) = crossbeam_channel::unbounded();
    tx.send("first".to_string()).unwrap();
    tx.send("second".to_string()).unwrap();
    Envelope {
        id: 7,
        inbox: rx,
        note: "private".to_string(),
    }
}

fn visit_count(config: IterConfig, value: &Envelope) -> usize {
    let walker = DfsWalker::new(Iter::new(config));
    let mut count = 0;
    walker
        .walk(value, &mut |_| {
            count += 1;
            Ok(())
        })
        .unwrap();
    count
}

#[test]
fn test_config_from_json_enables_channels() {
    let config = IterConfig::from_json(r#"{ "chan_recv": true, "exclude_unexported": true }"#)
        .unwrap();
    assert_eq!(visit_count(config, &envelope()), 3);
}

#[test]
fn test_empty_json_config_matches_default_walk() {
    let config = IterConfig::from_json("{}").unwrap();
    assert_eq!(config, IterConfig::default());
    assert_eq!(visit_count(config, &envelope()), 1);
}

#[test]
fn test_malformed_json_config_is_rejected() {
    let err = IterConfig::from_json(r#"{ "chan_recv": 1 }"#).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error: Failed to parse iterator config"));
}
