//! Mutable state threaded through one expansion run.
//!
//! Everything here is scoped to a single `expander::run` call — nothing is
//! shared between runs, so processing several files sequentially (or in
//! parallel with one session each) stays safe.

use std::collections::{BTreeSet, HashMap};

/// Library types the dialect invokes as bare constructor calls; the
/// post-pass needs them in the registry from the start.
const LIBRARY_CLASSES: &[&str] = &["InputStreamReader", "BufferedReader", "StringBuilder"];

#[derive(Debug)]
pub struct Session {
    /// Output fragments in emission order. One fragment may hold several
    /// lines (generated blocks keep their internal newlines).
    pub out: Vec<String>,

    /// `implements X.Visitor<T>` bindings: declaring class → return type.
    /// Entries are never removed within a run.
    pub visitor_returns: HashMap<String, String>,

    /// Every class name whose bare invocation must become a constructor
    /// call in the post-pass. BTreeSet keeps the rewrite order stable.
    pub classes: BTreeSet<String>,

    pub pending_return: PendingReturn,
}

impl Session {
    pub fn new() -> Self {
        Self {
            out: Vec::new(),
            visitor_returns: HashMap::new(),
            classes: LIBRARY_CLASSES.iter().map(|c| c.to_string()).collect(),
            pending_return: PendingReturn::default(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Brace tracker that injects a terminal `return null;` into Void-typed
/// visitor methods. Armed when such a method is expanded; every emitted
/// character afterwards feeds `observe`, and the brace that brings the
/// depth back to zero disarms it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PendingReturn {
    pub armed: bool,
    depth: u32,
}

impl PendingReturn {
    pub fn arm(&mut self) {
        self.armed = true;
        self.depth = 0;
    }

    /// Feeds one emitted character. Returns `true` exactly once per
    /// arming: on the `}` that closes the armed method.
    pub fn observe(&mut self, ch: char) -> bool {
        if !self.armed {
            return false;
        }
        match ch {
            '{' => self.depth += 1,
            '}' => {
                self.depth = self.depth.saturating_sub(1);
                if self.depth == 0 {
                    self.armed = false;
                    return true;
                }
            }
            _ => {}
        }
        false
    }
}
