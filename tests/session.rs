use chained_hashset::{
    ChainedHashSet, ChangeEvent, Command, Placement, Response, Session, TableView, TextView,
};

/// Records every notification as an owned tuple along with the table size
/// the view observed at that moment.
#[derive(Default)]
struct Recorder {
    seen: Vec<(String, String, usize)>,
}

impl TableView for Recorder {
    fn on_change(&mut self, event: &ChangeEvent<'_>, table: &ChainedHashSet) {
        let (kind, key) = match *event {
            ChangeEvent::Added { key, .. } => ("added", key),
            ChangeEvent::Removed { key } => ("removed", key),
        };
        self.seen.push((kind.to_string(), key.to_string(), table.len()));
    }
}

#[test]
fn view_sees_only_successful_mutations() {
    let mut rec = Recorder::default();
    {
        let mut s = Session::new(ChainedHashSet::with_buckets(10).unwrap(), &mut rec);
        for line in [
            "add cat",
            "add cat",
            "add dog",
            "contains cat",
            "size",
            "display",
            "remove cat",
            "remove cat",
            "add   ",
        ] {
            s.execute_line(line);
        }
    }
    assert_eq!(
        rec.seen,
        vec![
            ("added".to_string(), "cat".to_string(), 1),
            ("added".to_string(), "dog".to_string(), 2),
            ("removed".to_string(), "cat".to_string(), 1),
        ]
    );
}

#[test]
fn scripted_session_responses() {
    let mut s = Session::new(ChainedHashSet::with_buckets(10).unwrap(), TextView::new());
    let transcript: Vec<Response> = [
        Command::Add("cat".into()),
        Command::Add("cat".into()),
        Command::Add("dog".into()),
        Command::Size,
        Command::Remove("cat".into()),
        Command::Remove("cat".into()),
        Command::Size,
    ]
    .into_iter()
    .map(|c| s.execute(c))
    .collect();

    let flags: Vec<bool> = transcript.iter().map(|r| r.success).collect();
    assert_eq!(flags, [true, false, true, true, true, false, true]);
    assert_eq!(transcript[3].message, "Current size: 2");
    assert_eq!(transcript[6].message, "Current size: 1");
    assert_eq!(transcript[5].message, "Key not found: cat");

    let display = s.execute(Command::Display);
    assert!(display.success);
    assert!(display.message.contains("4: [dog]"));
    assert!(display.message.contains("2: []"));
}

#[test]
fn text_view_holds_latest_insert_until_settled() {
    let mut s = Session::new(ChainedHashSet::with_buckets(10).unwrap(), TextView::new());
    s.execute(Command::Add("a".into()));
    s.execute(Command::Add("k".into()));
    assert_eq!(
        s.view().pending(),
        Some(Placement {
            bucket: 7,
            position: 1
        })
    );
    assert!(s.view().frame().contains("[7] -> [a] -> [k] -> /"));

    assert!(s.view_mut().settle().is_some());
    assert_eq!(s.view().pending(), None);

    s.execute(Command::Remove("a".into()));
    assert_eq!(s.view().pending(), None);
    assert!(s.view().frame().contains("[7] -> [k] -> /"));

    let (table, view) = s.into_parts();
    assert_eq!(table.len(), 1);
    assert_eq!(view.updates(), 3);
}

#[test]
fn unit_view_discards_updates() {
    let mut s = Session::new(ChainedHashSet::with_buckets(4).unwrap(), ());
    assert!(s.execute(Command::Add("x".into())).success);
    assert!(s.execute(Command::Contains("x".into())).success);
    assert!(!s.execute(Command::Contains("y".into())).success);
}
