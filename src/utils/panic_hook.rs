use leptos::logging::log;
use std::panic;

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    }
}

/// Chains onto the browser console hook and adds a hint for panics caused by
/// touching a page's signals after it unmounted.
pub fn set_custom_panic_hook() {
    console_error_panic_hook::set_once();
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        original_hook(panic_info);

        let message = panic_message(panic_info.payload());
        if message.contains("OwnerDisposed") || message.contains("disposed") {
            log!("[PANIC] A signal was used after its page unmounted.");
            log!("[PANIC] Async continuations must go through OwnerScope::run or try_* signal methods.");
        }
    }));
}

pub fn init() {
    log!("[PANIC_HOOK] Setting up custom panic hook");
    set_custom_panic_hook();
}
