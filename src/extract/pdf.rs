// PDF text extraction via pdf-extract.
//
// pdf-extract works from memory and keeps the page layout reasonably intact.
// It can panic on some malformed files, so the call is wrapped in
// catch_unwind and a panic is reported like any other decode failure. The
// panic hook is swapped out for the duration of the call so a bad upload
// does not print a backtrace banner to stderr.

use std::panic::{self, UnwindSafe};
use std::sync::{Mutex, PoisonError};
use std::thread;

use tracing::warn;

use super::ExtractError;

pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractError> {
    match quietly(|| pdf_extract::extract_text_from_mem(bytes)) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(ExtractError::Decode(e.to_string())),
        Err(payload) => {
            let detail = panic_message(payload.as_ref());
            warn!(detail = %detail, "PDF parser panicked");
            Err(ExtractError::Decode(format!("unreadable PDF ({detail})")))
        }
    }
}

/// Serializes hook swaps between threads extracting at the same time.
static HOOK_LOCK: Mutex<()> = Mutex::new(());

/// `catch_unwind` with the panic hook silenced while `f` runs.
///
/// The hook is process-wide, so a panic on another thread inside this
/// window goes unprinted too.
fn quietly<T>(f: impl FnOnce() -> T + UnwindSafe) -> thread::Result<T> {
    let _guard = HOOK_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    let previous = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let result = panic::catch_unwind(f);
    panic::set_hook(previous);
    result
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "parser panic".to_string()
    }
}
