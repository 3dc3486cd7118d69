use std::collections::HashMap;

use anyhow::Result;

/// Persistence hooks behind a [`HostMap`](crate::host_map::HostMap).
///
/// Every mutation of the map is recorded here before it is applied in memory,
/// so an error from any of these methods leaves the map untouched.
pub trait Store {
    /// Returns the full mapping held by the backing store.
    fn load(&mut self) -> Result<HashMap<String, String>>;

    fn add(&mut self, host: &str, target: &str) -> Result<()>;

    fn remove(&mut self, host: &str) -> Result<()>;

    fn modify(&mut self, host: &str, target: &str) -> Result<()>;
}

type LoadFn<H> = Box<dyn FnMut(&mut H) -> Result<HashMap<String, String>> + Send + Sync>;
type AddFn<H> = Box<dyn FnMut(&mut H, &str, &str) -> Result<()> + Send + Sync>;
type RemoveFn<H> = Box<dyn FnMut(&mut H, &str) -> Result<()> + Send + Sync>;
type ModifyFn<H> = Box<dyn FnMut(&mut H, &str, &str) -> Result<()> + Send + Sync>;

/// A [`Store`] assembled from plain functions.
///
/// `handle` is passed to every function, e.g. a database connection. Use
/// [`Callbacks::stateless`] when the functions capture what they need.
pub struct Callbacks<H = ()> {
    handle: H,
    load: LoadFn<H>,
    add: AddFn<H>,
    remove: RemoveFn<H>,
    modify: ModifyFn<H>,
}

impl<H> Callbacks<H> {
    pub fn new<L, A, R, M>(handle: H, load: L, add: A, remove: R, modify: M) -> Self
    where
        L: FnMut(&mut H) -> Result<HashMap<String, String>> + Send + Sync + 'static,
        A: FnMut(&mut H, &str, &str) -> Result<()> + Send + Sync + 'static,
        R: FnMut(&mut H, &str) -> Result<()> + Send + Sync + 'static,
        M: FnMut(&mut H, &str, &str) -> Result<()> + Send + Sync + 'static,
    {
        Self {
            handle,
            load: Box::new(load),
            add: Box::new(add),
            remove: Box::new(remove),
            modify: Box::new(modify),
        }
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }
}

impl Callbacks<()> {
    pub fn stateless<L, A, R, M>(mut load: L, mut add: A, mut remove: R, mut modify: M) -> Self
    where
        L: FnMut() -> Result<HashMap<String, String>> + Send + Sync + 'static,
        A: FnMut(&str, &str) -> Result<()> + Send + Sync + 'static,
        R: FnMut(&str) -> Result<()> + Send + Sync + 'static,
        M: FnMut(&str, &str) -> Result<()> + Send + Sync + 'static,
    {
        Self::new(
            (),
            move |_| load(),
            move |_, host, target| add(host, target),
            move |_, host| remove(host),
            move |_, host, target| modify(host, target),
        )
    }
}

impl<H> Store for Callbacks<H> {
    fn load(&mut self) -> Result<HashMap<String, String>> {
        (self.load)(&mut self.handle)
    }

    fn add(&mut self, host: &str, target: &str) -> Result<()> {
        (self.add)(&mut self.handle, host, target)
    }

    fn remove(&mut self, host: &str) -> Result<()> {
        (self.remove)(&mut self.handle, host)
    }

    fn modify(&mut self, host: &str, target: &str) -> Result<()> {
        (self.modify)(&mut self.handle, host, target)
    }
}
