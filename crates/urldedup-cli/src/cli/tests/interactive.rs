//! Interactive loop driven from an in-memory script.

use crate::cli::clipboard::testing::MemoryClipboard;
use crate::cli::clipboard::Clipboard;
use crate::cli::commands::interact;
use urldedup_core::config::UrlDedupConfig;

async fn run_script(script: &str, cfg: &UrlDedupConfig, clipboard: &mut Clipboard) -> String {
    let mut out = Vec::<u8>::new();
    interact(cfg, script.as_bytes(), &mut out, clipboard)
        .await
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[tokio::test]
async fn paste_submit_toggle_copy() {
    let mem = MemoryClipboard::default();
    *mem.0.lock().unwrap() = "https://b.com/?ref=1\nhttps://c.com".to_string();
    let mut clipboard = Clipboard::with_provider(Box::new(mem.clone()));

    let script = "\
https://a.com/x?p=1
https://a.com/x?p=2 not-a-url
paste
submit
toggle 2
view text
copy
status
quit
show
";
    let cfg = UrlDedupConfig {
        show_markers: true,
        ..UrlDedupConfig::default()
    };
    let out = run_script(script, &cfg, &mut clipboard).await;

    assert!(out.contains("pasted 2 lines"));
    assert!(out.contains("3 unique URLs"));
    assert!(out.contains("row 2 marked used"));
    assert!(out.contains("[ ] https://a.com/x\n[x] https://b.com\n[ ] https://c.com\n"));
    assert!(out.contains("copied 3 URLs"));
    assert!(out.contains("items: 3 (1 used), view: text, state: idle"));
    // Nothing after quit runs.
    assert_eq!(out.matches("[x] https://b.com").count(), 1);
    assert_eq!(
        *mem.0.lock().unwrap(),
        "[ ] https://a.com/x\n[x] https://b.com\n[ ] https://c.com"
    );
}

#[tokio::test]
async fn bad_commands_are_reported_and_loop_continues() {
    let mut clipboard = Clipboard::unavailable();
    let script = "toggle abc\nview grid\ntoggle 1\nshow\nhttps://a.com\nsubmit\n";
    let out = run_script(script, &UrlDedupConfig::default(), &mut clipboard).await;

    assert!(out.contains("bad command: toggle expects a row number"));
    assert!(out.contains("bad command: unknown view mode 'grid'"));
    assert!(out.contains("no item at index 0 (list has 0 items)"));
    assert!(out.contains("no URLs"));
    assert!(out.contains("1 unique URLs"));
}

#[tokio::test]
async fn resubmit_resets_used_marks() {
    let mut clipboard = Clipboard::unavailable();
    let script = "https://a.com\nsubmit\ntoggle 1\nsubmit\nstatus\n";
    let out = run_script(script, &UrlDedupConfig::default(), &mut clipboard).await;
    assert!(out.contains("row 1 marked used"));
    assert!(out.contains("items: 1 (0 used)"));
}

#[tokio::test]
async fn submit_delay_shows_processing() {
    let mut clipboard = Clipboard::unavailable();
    let cfg = UrlDedupConfig {
        submit_delay_ms: 5,
        ..UrlDedupConfig::default()
    };
    let out = run_script("https://a.com\nsubmit\n", &cfg, &mut clipboard).await;
    let processing = out.find("processing...").unwrap();
    let done = out.find("1 unique URLs").unwrap();
    assert!(processing < done);
}

#[tokio::test]
async fn empty_clipboard_paste() {
    let mut clipboard = Clipboard::unavailable();
    let out = run_script("paste\n", &UrlDedupConfig::default(), &mut clipboard).await;
    assert!(out.contains("clipboard is empty"));
}

#[tokio::test]
async fn keyword_prefixed_line_is_kept_as_input() {
    let mut clipboard = Clipboard::unavailable();
    let script = "show https://a.com/page\nquit https://b.com\nsubmit\n";
    let out = run_script(script, &UrlDedupConfig::default(), &mut clipboard).await;
    assert!(out.contains("2 unique URLs"));
    assert!(out.contains("https://a.com/page"));
}
