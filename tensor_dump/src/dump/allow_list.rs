use std::{collections::HashSet, sync::OnceLock};

use crate::DumpEnvVar;

/// Entry that allows every operation.
pub const WILDCARD: &str = "all";

/// Decides whether an operation's arguments are dumped.
pub trait OpFilter {
    fn is_allowed(
        &self,
        op_name: &str,
    ) -> bool;
}

impl<T: OpFilter + ?Sized> OpFilter for &T {
    fn is_allowed(
        &self,
        op_name: &str,
    ) -> bool {
        (**self).is_allowed(op_name)
    }
}

/// Immutable set of operation names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    names: HashSet<String>,
}

impl AllowList {
    /// Splits `config` on commas. Names are taken verbatim.
    pub fn parse(config: &str) -> Self {
        Self {
            names: config
                .split(',')
                .filter(|name| !name.is_empty())
                .map(str::to_owned)
                .collect(),
        }
    }

    /// An absent configuration allows nothing.
    pub fn from_config(config: Option<&str>) -> Self {
        config.map(Self::parse).unwrap_or_default()
    }

    pub fn allows_all(&self) -> bool {
        self.names.contains(WILDCARD)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl OpFilter for AllowList {
    fn is_allowed(
        &self,
        op_name: &str,
    ) -> bool {
        self.allows_all() || self.names.contains(op_name)
    }
}

/// Lazily parsed allow list. The source is read and parsed exactly once, by
/// whichever caller gets there first; concurrent callers wait for it and all
/// observe the same list.
pub struct AllowListStore<F = fn() -> Option<String>> {
    list: OnceLock<AllowList>,
    source: F,
}

impl<F> AllowListStore<F> {
    pub const fn new(source: F) -> Self {
        Self {
            list: OnceLock::new(),
            source,
        }
    }
}

impl<F: Fn() -> Option<String>> AllowListStore<F> {
    pub fn get(&self) -> &AllowList {
        self.list.get_or_init(|| {
            let list = AllowList::from_config((self.source)().as_deref());
            for name in list.names() {
                tracing::info!("{}: {}", DumpEnvVar::OpList.key(), name);
            }
            list
        })
    }
}

impl<F: Fn() -> Option<String>> OpFilter for AllowListStore<F> {
    fn is_allowed(
        &self,
        op_name: &str,
    ) -> bool {
        self.get().is_allowed(op_name)
    }
}

fn op_list_from_env() -> Option<String> {
    DumpEnvVar::OpList.value()
}

pub(crate) static GLOBAL_ALLOW_LIST: AllowListStore =
    AllowListStore::new(op_list_from_env as fn() -> Option<String>);

/// The process-wide allow list, read from `TENSOR_DUMP_OP_LIST` on first use.
pub fn global_allow_list() -> &'static AllowList {
    GLOBAL_ALLOW_LIST.get()
}
