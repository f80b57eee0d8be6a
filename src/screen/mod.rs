pub mod render;

/// One level of the drill-down, carrying the identifiers selected on the
/// screens above it. Pushing a screen is the only way ids travel forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    TreeTypes,
    Species {
        type_id: i64,
    },
    Symptoms {
        tree_id: i64,
    },
    Diseases {
        tree_id: i64,
        location_id: i64,
        damage_id: i64,
    },
}

/// Stack-based router: navigation state is exactly the stack of screens.
/// Each screen runs its one query synchronously on activation, so no query
/// result can outlive the screen that issued it.
#[derive(Debug)]
pub struct Navigator {
    stack: Vec<Screen>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Screen::TreeTypes],
        }
    }

    pub fn current(&self) -> Screen {
        *self.stack.last().unwrap_or(&Screen::TreeTypes)
    }

    pub fn push(&mut self, screen: Screen) {
        self.stack.push(screen);
    }

    /// Returns to the previous screen; `false` means we were already at the
    /// root and the caller should leave the browse loop instead.
    pub fn pop(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
