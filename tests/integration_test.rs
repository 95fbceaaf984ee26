use std::rc::Rc;

use content_audit::{
    classify, classify_delete, classify_restore, interpolate, render, Classification,
    ContentLogger, ContentLoggerConfig, EntryFormatter, EventKind, HostEvent, InMemoryItems,
    ItemId, ItemLookup, ItemSnapshot, JsonLinesSink, LifecycleStatus, LogEntry, LoggerRegistry,
    MemorySink,
};

fn status(raw: &str) -> LifecycleStatus {
    LifecycleStatus::from(raw)
}

#[test]
fn documented_transitions() {
    assert_eq!(
        classify(&status("auto-draft"), &status("draft"), false),
        Classification::Emit(EventKind::Created)
    );
    assert!(classify(&status("auto-draft"), &status("auto-draft"), false).is_ignored());
    assert!(classify(&status("new"), &status("inherit"), false).is_ignored());
    assert_eq!(
        classify(&status("draft"), &status("pending"), false),
        Classification::Emit(EventKind::Updated)
    );
    assert_eq!(
        classify(&status("pending"), &status("trash"), false),
        Classification::Emit(EventKind::Trashed)
    );
    assert_eq!(
        classify(&status("publish"), &status("publish"), false),
        Classification::Emit(EventKind::Updated)
    );
}

#[test]
fn documented_delete_and_restore() {
    assert!(classify_delete(&status("auto-draft"), false).is_ignored());
    assert_eq!(
        classify_delete(&status("publish"), false),
        Classification::Emit(EventKind::Deleted)
    );
    assert_eq!(classify_restore(), Classification::Emit(EventKind::Restored));
}

#[test]
fn documented_rendering() {
    assert_eq!(
        render(
            r#"Created {item_type} "{item_title}""#,
            [("item_type", "post"), ("item_title", "Hello")]
        ),
        r#"Created post "Hello""#
    );
    assert_eq!(render("{x}", Vec::<(&str, &str)>::new()), "{x}");
}

#[test]
fn post_lifecycle_end_to_end() {
    let items = Rc::new(InMemoryItems::with_edit_links(
        "/wp-admin/post.php?post={item_id}&action=edit",
    ));
    let sink = Rc::new(MemorySink::new());
    let registry = LoggerRegistry::new(Rc::clone(&sink))
        .with(ContentLogger::new(Rc::clone(&items)).with_links(Rc::clone(&items)))
        .expect("unique slug");

    // Allocate a placeholder: nothing logged
    let placeholder = ItemSnapshot::new(ItemId(42), "post", "", "auto-draft");
    items.insert(placeholder.clone());
    assert_eq!(registry.dispatch(&HostEvent::transition("new", "auto-draft", placeholder)), 0);

    // First save as draft: created
    let draft = ItemSnapshot::new(ItemId(42), "post", "Launch notes", "draft");
    items.insert(draft.clone());
    assert_eq!(registry.dispatch(&HostEvent::transition("auto-draft", "draft", draft)), 1);

    // Revision snapshot of the save: ignored
    let revision =
        ItemSnapshot::new(ItemId(43), "revision", "Launch notes", "inherit").as_revision();
    assert_eq!(registry.dispatch(&HostEvent::transition("new", "inherit", revision)), 0);

    // Publish: updated
    let published = ItemSnapshot::new(ItemId(42), "post", "Launch notes", "publish");
    items.insert(published.clone());
    assert_eq!(registry.dispatch(&HostEvent::transition("draft", "publish", published)), 1);

    // Trash, restore, trash again, then delete permanently
    let trashed = ItemSnapshot::new(ItemId(42), "post", "Launch notes", "trash");
    items.insert(trashed.clone());
    assert_eq!(registry.dispatch(&HostEvent::transition("publish", "trash", trashed.clone())), 1);
    assert_eq!(registry.dispatch(&HostEvent::restored(ItemId(42))), 1);
    assert_eq!(registry.dispatch(&HostEvent::transition("draft", "trash", trashed)), 1);
    assert_eq!(registry.dispatch(&HostEvent::deleted(ItemId(42))), 1);
    items.remove(ItemId(42));

    let messages: Vec<String> = sink.entries().iter().map(LogEntry::to_string).collect();
    assert_eq!(
        messages,
        vec![
            r#"Created post "Launch notes""#,
            r#"Updated post "Launch notes""#,
            r#"Moved post "Launch notes" to the trash"#,
            r#"Restored post "Launch notes" from trash"#,
            r#"Moved post "Launch notes" to the trash"#,
            r#"Deleted post "Launch notes""#,
        ]
    );

    // The item is gone, so rendering no longer links it
    let rendered = registry.render(&sink.entries()[0]);
    assert_eq!(rendered, r#"Created post "Launch notes""#);
}

#[test]
fn rendering_links_live_items() {
    let items = InMemoryItems::with_edit_links("/edit/{item_id}");
    items.insert(ItemSnapshot::new(ItemId(7), "page", "R&D <team>", "publish"));

    let logger = ContentLogger::new(&items);
    let item = items.resolve(ItemId(7)).expect("fixture exists");
    let entry = logger
        .on_status_transition(&status("publish"), &status("trash"), &item)
        .expect("trashing is logged");

    let formatter = EntryFormatter::new(&items);
    assert_eq!(
        formatter.format(&entry),
        r#"Moved page <a href="/edit/7">"R&amp;D &lt;team&gt;"</a> to the trash"#
    );
    assert_eq!(formatter.format_plain(&entry), r#"Moved page "R&D <team>" to the trash"#);
}

#[test]
fn attachment_shadow_lifecycle() {
    let items = InMemoryItems::new();
    let attachment = ItemSnapshot::new(ItemId(5), "attachment", "photo.jpg", "inherit");
    items.insert(attachment.clone());

    let logger = ContentLogger::new(&items);

    // Upload creates an inherit shadow: nothing logged
    assert!(logger
        .on_status_transition(&status("new"), &status("inherit"), &attachment)
        .is_none());

    // Deleting the shadow: nothing logged
    assert!(logger.on_delete(ItemId(5)).is_none());
}

#[test]
fn custom_status_and_type_pass_through() {
    let items = InMemoryItems::new();
    let logger = ContentLogger::new(&items);

    let order = ItemSnapshot::new(ItemId(100), "shop_order", "Order #100", "wc-processing");
    let entry = logger
        .on_status_transition(&status("wc-pending"), &status("wc-processing"), &order)
        .expect("unknown statuses update");
    assert_eq!(entry.kind(), EventKind::Updated);
    assert_eq!(entry.to_string(), r#"Updated shop_order "Order #100""#);

    let logger = ContentLogger::with_config(
        &items,
        ContentLoggerConfig::default().exclude_type("shop_order"),
    );
    assert!(logger
        .on_status_transition(&status("wc-pending"), &status("wc-processing"), &order)
        .is_none());
}

#[test]
fn json_lines_round_trip_and_rerender() {
    let items = InMemoryItems::with_edit_links("/edit/{item_id}");
    items.insert(ItemSnapshot::new(ItemId(3), "post", "Hello", "publish"));

    let sink = JsonLinesSink::new(Vec::new());
    let registry = LoggerRegistry::new(&sink)
        .with(ContentLogger::new(&items))
        .expect("unique slug");
    registry.dispatch(&HostEvent::deleted(ItemId(3)));
    drop(registry);

    let stored = String::from_utf8(sink.into_inner()).expect("utf-8");
    let entry = LogEntry::from_json(stored.trim_end()).expect("valid json");
    assert_eq!(entry.kind(), EventKind::Deleted);

    // Render later, with a formatter of the host's choosing
    assert_eq!(
        EntryFormatter::new(&items).format(&entry),
        r#"Deleted post <a href="/edit/3">"Hello"</a>"#
    );
}

#[test]
fn interpolate_keeps_single_line() {
    let out = interpolate(
        r#"Updated {item_type} "{item_title}""#,
        [("item_type", "post"), ("item_title", "a\nb")],
    );
    assert_eq!(out, r#"Updated post "a b""#);
}

#[test]
fn delete_of_unresolvable_item_is_recorded() {
    let items = InMemoryItems::new();
    let sink = MemorySink::new();
    let registry = LoggerRegistry::new(&sink)
        .with(ContentLogger::new(&items))
        .expect("unique slug");

    assert_eq!(registry.dispatch(&HostEvent::deleted(ItemId(77))), 1);

    let entries = sink.entries();
    assert_eq!(entries[0].kind(), EventKind::Deleted);
    assert_eq!(entries[0].context().item_id, ItemId(77));
    assert_eq!(entries[0].to_string(), r#"Deleted  """#);
}

#[test]
fn default_logger_records_every_emitted_type() {
    let items = InMemoryItems::new();
    let logger = ContentLogger::new(&items);

    for item_type in ["post", "page", "nav_menu_item", "shop_order"] {
        let item = ItemSnapshot::new(ItemId(1), item_type, "Home", "publish");
        let entry = logger
            .on_status_transition(&status("publish"), &status("publish"), &item)
            .expect("nothing is excluded by default");
        assert_eq!(entry.kind(), EventKind::Updated);
    }
}
