use super::constraint::parse_constraints;
use super::evaluation::evaluate_route;
use super::{RouterError, RouterOptions, RouterResult};
use crate::params::ParamSource;
use crate::predicate::ParamPredicate;
use crate::types::{HttpMethod, RouteKey, RouteMatch};
use parking_lot::RwLock;
use std::sync::{Arc, OnceLock};

#[derive(Debug, Clone)]
struct RouteEntry {
    key: RouteKey,
    method: HttpMethod,
    predicates: Vec<ParamPredicate>,
}

/// Sealed, immutable view of the registered routes.
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<RouteEntry>,
    options: RouterOptions,
}

impl RouteTable {
    /// Tries routes in definition order; the first one whose whole predicate
    /// chain matches wins.
    #[tracing::instrument(skip(self, params), fields(method=?method))]
    pub fn find<P>(&self, method: HttpMethod, params: &P) -> RouterResult<RouteMatch>
    where
        P: ParamSource + ?Sized,
    {
        tracing::event!(tracing::Level::TRACE, operation="find", method=?method, routes=self.routes.len() as u64);

        for route in self.routes.iter().filter(|route| route.method == method) {
            match evaluate_route(&route.predicates, params, self.options.group_commit) {
                Some(captures) => return Ok((route.key, captures)),
                None if self.options.debug => {
                    tracing::event!(
                        tracing::Level::DEBUG,
                        operation = "find",
                        key = route.key as u64,
                        "route constraints not satisfied"
                    );
                }
                None => {}
            }
        }

        if self.options.debug {
            tracing::event!(tracing::Level::DEBUG, operation="find", method=?method, "no route matched");
        }
        Err(RouterError::RouteNotFound { method })
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn options(&self) -> &RouterOptions {
        &self.options
    }
}

#[derive(Debug)]
struct RouterState {
    options: RouterOptions,
    routes: Vec<RouteEntry>,
    readonly: OnceLock<Arc<RouteTable>>,
}

#[derive(Debug)]
pub struct Router {
    inner: RwLock<RouterState>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Router {
    pub fn new(options: Option<RouterOptions>) -> Self {
        Self {
            inner: RwLock::new(RouterState {
                options: options.unwrap_or_default(),
                routes: Vec::new(),
                readonly: OnceLock::new(),
            }),
        }
    }

    pub fn add<I>(&self, method: HttpMethod, predicates: I) -> RouterResult<RouteKey>
    where
        I: IntoIterator<Item = ParamPredicate>,
    {
        let mut guard = self.inner.write();

        if guard.readonly.get().is_some() {
            return Err(RouterError::AddWhileSealed { method });
        }

        let limit = guard.options.max_routes;
        if guard.routes.len() >= limit {
            return Err(RouterError::MaxRoutesExceeded { limit });
        }

        let key = guard.routes.len() as RouteKey;
        let predicates: Vec<ParamPredicate> = predicates.into_iter().collect();
        tracing::event!(tracing::Level::TRACE, operation="add", method=?method, key=key as u64, predicates=predicates.len() as u64);

        guard.routes.push(RouteEntry {
            key,
            method,
            predicates,
        });
        Ok(key)
    }

    /// Registers a route from a JSON constraint object such as
    /// `{"params!": ["foo", "baz"]}`.
    pub fn add_declared(&self, method: HttpMethod, constraints: &str) -> RouterResult<RouteKey> {
        let predicates = parse_constraints(constraints)?;
        self.add(method, predicates)
    }

    pub fn seal(&self) {
        let mut guard = self.inner.write();
        if guard.readonly.get().is_some() {
            return;
        }

        let table = RouteTable {
            routes: std::mem::take(&mut guard.routes),
            options: guard.options.clone(),
        };
        let _ = guard.readonly.set(Arc::new(table));
    }

    pub fn find<P>(&self, method: HttpMethod, params: &P) -> RouterResult<RouteMatch>
    where
        P: ParamSource + ?Sized,
    {
        let guard = self.inner.read();

        match guard.readonly.get() {
            Some(table) => table.find(method, params),
            None => Err(RouterError::FindWhileMutable),
        }
    }

    pub fn get_readonly(&self) -> RouterResult<Arc<RouteTable>> {
        let guard = self.inner.read();

        match guard.readonly.get() {
            Some(table) => Ok(table.clone()),
            None => Err(RouterError::ReadOnlyUnavailable),
        }
    }

    /// Routes registered so far, sealed or not.
    pub fn len(&self) -> usize {
        let guard = self.inner.read();
        match guard.readonly.get() {
            Some(table) => table.len(),
            None => guard.routes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
