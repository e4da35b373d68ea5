use std::process::Child;

/// Children launched during one line that nobody has waited on yet.
#[derive(Debug, Default)]
pub struct Barrier {
    children: Vec<Child>,
}

impl Barrier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&mut self, child: Child) {
        self.children.push(child);
    }

    pub fn pending(&self) -> usize {
        self.children.len()
    }

    /// Blocks until every tracked child has exited; returns how many were reaped.
    ///
    /// There is no timeout: a child that never exits blocks the shell.
    pub fn wait_all(&mut self) -> usize {
        let mut reaped = 0;
        for mut child in self.children.drain(..) {
            let pid = child.id();
            match child.wait() {
                Ok(status) => {
                    log::debug!("reaped {} ({})", pid, status);
                    reaped += 1;
                }
                Err(e) => log::warn!("failed to wait for {}: {}", pid, e),
            }
        }
        reaped
    }
}
