use std::collections::HashMap;

use crossbeam_channel::Receiver;
use pretty_assertions::assert_eq;
use refwalk::{DfsWalker, Iter, IterConfig, Key, Pair, WalkError, Walker, impl_record, walk};
use rstest::rstest;

struct Level {
    pub head: String,
    pub child: Option<Box<Level>>,
    pub map_enter: String,
    pub map: HashMap<String, i32>,
    pub slice_enter: String,
    pub slice: Vec<String>,
    pub chan_enter: String,
    pub chan: Receiver<String>,
    pub tail: String,
}

impl_record!(Level {
    pub head,
    pub child,
    pub map_enter,
    pub map,
    pub slice_enter,
    pub slice,
    pub chan_enter,
    pub chan,
    pub tail,
});

fn tid(ident: &str, depth: usize) -> String {
    format!("{ident}|{depth}")
}

fn level(child: Option<Box<Level>>, i: usize) -> Level {
    let (tx, rx) = crossbeam_channel::bounded(3);
    for n in [10, 20, 30] {
        tx.send(tid("Chan", i * n)).unwrap();
    }

    Level {
        head: tid("Head", i),
        child,
        map_enter: tid("MapEnter", i),
        map: HashMap::from([
            (tid("Map", i), (i * 2) as i32),
            (tid("Map", i + 1), (i * 2) as i32),
            (tid("Map", i + 2), (i * 2) as i32),
        ]),
        slice_enter: tid("SliceEnter", i),
        slice: vec![tid("Slice", i * 10), tid("Slice", i * 20), tid("Slice", i * 30)],
        chan_enter: tid("ChanEnter", i),
        chan: rx,
        tail: tid("Tail", i),
    }
}

/// Builds four linked levels, outermost first.
fn linked_levels() -> Level {
    let mut tree = level(None, 4);
    for i in (1..=3).rev() {
        tree = level(Some(Box::new(tree)), i);
    }
    tree
}

fn render(pair: &Pair<'_>) -> String {
    let key = pair.key().map_or_else(String::new, ToString::to_string);
    format!("{} {} -> {}", pair.depth(), key, pair.value())
}

#[test]
fn test_walk_map_end_to_end() {
    let map = HashMap::from([(1, "a"), (2, "b"), (3, "c")]);
    let mut lines = Vec::new();
    walk(&map, |pair| {
        lines.push(pair.to_string());
        Ok(())
    })
    .unwrap();
    lines.sort();

    assert_eq!(
        lines,
        vec![
            "Pair{(i32) 1 => a (&str)}",
            "Pair{(i32) 2 => b (&str)}",
            "Pair{(i32) 3 => c (&str)}",
        ]
    );
}

#[test]
fn test_walk_sequence_end_to_end() {
    let mut lines = Vec::new();
    walk(&vec!["a", "b"], |pair| {
        lines.push(pair.to_string());
        Ok(())
    })
    .unwrap();

    assert_eq!(
        lines,
        vec!["Pair{(usize) 0 => a (&str)}", "Pair{(usize) 1 => b (&str)}"]
    );
}

#[test]
fn test_walk_linked_levels_with_channels() {
    let tree = linked_levels();
    let walker = DfsWalker::new(Iter::new(IterConfig::new().chan_recv(true)));

    let mut heads = Vec::new();
    let mut tails = Vec::new();
    let mut received = 0;
    let mut visits = 0;
    walker
        .walk(&tree, &mut |pair| {
            visits += 1;
            let value = pair.value().to_string();
            match pair.key().and_then(Key::as_field).map(|field| field.name) {
                Some("head") => heads.push((pair.depth(), value)),
                Some("tail") => tails.push((pair.depth(), value)),
                _ if value.starts_with("Chan|") => received += 1,
                _ => {}
            }
            Ok(())
        })
        .unwrap();

    // Fourteen terminals per level plus the absent deepest child.
    assert_eq!(visits, 57);
    assert_eq!(received, 12);
    assert_eq!(
        heads,
        vec![
            (1, "Head|1".to_string()),
            (2, "Head|2".to_string()),
            (3, "Head|3".to_string()),
            (4, "Head|4".to_string())
        ]
    );
    assert_eq!(
        tails,
        vec![
            (4, "Tail|4".to_string()),
            (3, "Tail|3".to_string()),
            (2, "Tail|2".to_string()),
            (1, "Tail|1".to_string())
        ]
    );
}

#[test]
fn test_default_walk_leaves_channels_alone() {
    let tree = linked_levels();
    let mut visits = 0;
    walk(&tree, |_| {
        visits += 1;
        Ok(())
    })
    .unwrap();

    assert_eq!(visits, 45);
    assert_eq!(tree.chan.len(), 3);
}

struct Node {
    pub head: String,
    pub child: Option<Box<Node>>,
    pub tail: String,
}

impl_record!(Node { pub head, pub child, pub tail });

#[test]
fn test_walk_recursion_rendering() {
    let mut tree = Node {
        head: "head #4".to_string(),
        child: None,
        tail: "tail #4".to_string(),
    };
    for i in (1..=3).rev() {
        tree = Node {
            head: format!("head #{i}"),
            child: Some(Box::new(tree)),
            tail: format!("tail #{i}"),
        };
    }

    let mut lines = Vec::new();
    walk(&tree, |pair| {
        lines.push(render(pair));
        Ok(())
    })
    .unwrap();

    insta::assert_snapshot!(lines.join("\n"), @r"
    1 head -> head #1
    2 head -> head #2
    3 head -> head #3
    4 head -> head #4
    4 child -> <nil>
    4 tail -> tail #4
    3 tail -> tail #3
    2 tail -> tail #2
    1 tail -> tail #1
    ");
}

#[rstest]
#[case::first(0)]
#[case::middle(20)]
#[case::last(44)]
fn test_walk_stops_at_nth_visit(#[case] stop_at: usize) {
    let tree = linked_levels();
    let mut visits = 0;
    let err = walk(&tree, |_| {
        if visits == stop_at {
            return Err(WalkError::halt(format!("stopped at {visits}")));
        }
        visits += 1;
        Ok(())
    })
    .unwrap_err();

    assert_eq!(visits, stop_at);
    assert_eq!(err.to_string(), format!("stopped at {stop_at}"));
}

#[test]
fn test_walk_blocking_channel_fed_by_producer() {
    let (tx, rx) = crossbeam_channel::bounded::<Vec<u8>>(1);
    let producer = std::thread::spawn(move || {
        for n in 0..5_u8 {
            tx.send(vec![n; n as usize]).unwrap();
        }
    });

    let walker = DfsWalker::new(Iter::recovering(
        IterConfig::new().chan_recv(true).chan_block(true),
    ));
    let mut total = 0_u32;
    walker
        .walk(&rx, &mut |pair| {
            assert_eq!(pair.depth(), 2);
            total += pair.value().to_string().parse::<u32>().unwrap();
            Ok(())
        })
        .unwrap();
    producer.join().unwrap();

    // 1*1 + 2*2 + 3*3 + 4*4
    assert_eq!(total, 30);
}
