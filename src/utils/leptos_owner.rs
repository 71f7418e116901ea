use leptos::logging::log;
use leptos::{try_with_owner, Owner};

/// The reactive owner of a component, captured before an `await` so the
/// continuation can tell whether the component is still mounted.
#[derive(Clone, Copy)]
pub struct OwnerScope {
    owner: Option<Owner>,
}

impl OwnerScope {
    pub fn capture() -> Self {
        Self {
            owner: Owner::current(),
        }
    }

    /// Runs `f` under the captured owner. If the owner is gone, logs and
    /// returns None without running `f`.
    pub fn run<F, R>(&self, log_context: &str, f: F) -> Option<R>
    where
        F: FnOnce() -> R,
    {
        match self.owner {
            Some(owner) => match try_with_owner(owner, f) {
                Ok(value) => Some(value),
                Err(err) => {
                    log!("[OWNER] Skipping {} after unmount: {:?}", log_context, err);
                    None
                }
            },
            None => {
                log!("[OWNER] No Leptos owner in context: {}", log_context);
                None
            }
        }
    }
}
