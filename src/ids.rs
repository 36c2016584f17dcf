use std::sync::atomic::{AtomicU64, Ordering};

static SEQ: AtomicU64 = AtomicU64::new(0);

/// Milisegundos desde epoch (reloj del navegador en wasm).
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Id único `<prefijo>-<ms>-<seq>`. El contador de proceso descarta
/// colisiones dentro del mismo milisegundo.
pub fn next(prefix: &str) -> String {
    let seq = SEQ.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{}-{seq}", now_ms())
}

#[cfg(test)]
mod tests {
    use super::next;

    #[test]
    fn ids_in_the_same_millisecond_do_not_collide() {
        let a = next("q");
        let b = next("q");
        assert_ne!(a, b);
    }

    #[test]
    fn id_keeps_the_requested_prefix() {
        let id = next("imported");
        assert!(id.starts_with("imported-"));
    }
}
