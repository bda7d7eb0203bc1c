use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_MAX_ROUTES: usize = u16::MAX as usize;

/// When a multi-key predicate may append to the route's captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GroupCommit {
    /// Append as each key matches; a failing group leaves earlier values behind.
    #[default]
    Eager,
    /// Collect into a scratch list and append only when every key matched.
    Buffered,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouterOptions {
    pub group_commit: GroupCommit,
    pub max_routes: usize,
    pub debug: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            group_commit: GroupCommit::default(),
            max_routes: DEFAULT_MAX_ROUTES,
            debug: false,
        }
    }
}

impl RouterOptions {
    pub fn builder() -> RouterOptionsBuilder {
        RouterOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), RouterOptionsError> {
        if self.max_routes == 0 || self.max_routes > DEFAULT_MAX_ROUTES {
            return Err(RouterOptionsError::MaxRoutesInvalid {
                provided: self.max_routes,
                max: DEFAULT_MAX_ROUTES,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct RouterOptionsBuilder {
    options: RouterOptions,
}

impl RouterOptionsBuilder {
    pub fn group_commit(mut self, value: GroupCommit) -> Self {
        self.options.group_commit = value;
        self
    }

    pub fn max_routes(mut self, value: usize) -> Self {
        self.options.max_routes = value;
        self
    }

    pub fn debug(mut self, value: bool) -> Self {
        self.options.debug = value;
        self
    }

    pub fn build(self) -> Result<RouterOptions, RouterOptionsError> {
        let options = self.options;
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterOptionsError {
    #[error("max_routes must be within 1..={max} (got {provided})")]
    MaxRoutesInvalid { provided: usize, max: usize },
}
