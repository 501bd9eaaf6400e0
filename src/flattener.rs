use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;
use tracing::{debug, trace};

use crate::args::ResolvedArgs;
use crate::breakpoint::BreakPoint;
use crate::config::{Config, Settings, DEFAULT_SETTINGS};
use crate::errors::Result;
use crate::format::format;

/// Breakpoint labels mapped to delimiter separated classes, flattened in
/// insertion order.
pub type ResponsiveMap<K = BreakPoint> = IndexMap<K, String>;

/// A flattener with a configuration baked in.
///
/// `K` is the breakpoint label type accepted by the typed methods. It only
/// exists for the type checker: `Twclsx<&str>` or a custom screen enum work
/// the same at runtime as the default [`BreakPoint`].
///
/// ```
/// use indexmap::IndexMap;
/// use twclsx::{configure, Config};
///
/// let tw = configure::<&str>(Config::new().with_separator("|").with_delimiter("::"));
/// let params = IndexMap::from([("sm", "x::y")]);
/// assert_eq!(tw.flatten("b", &params), "b sm|x sm|y");
/// ```
pub struct Twclsx<K = BreakPoint> {
    config: Config,
    breakpoints: PhantomData<fn() -> K>,
}

impl<K> Twclsx<K> {
    pub const fn new(config: Config) -> Self {
        Self {
            config,
            breakpoints: PhantomData,
        }
    }

    /// The baked-in partial configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Baked-in configuration resolved against the defaults
    pub fn settings(&self) -> Settings<'_> {
        self.config.resolve()
    }

    /// Flatten a dynamic call where either argument may be missing or of the
    /// wrong type.
    pub fn flatten_value(&self, base: Option<&Value>, params: Option<&Value>) -> Result<String> {
        self.flatten_value_with(base, params, &Config::default())
    }

    /// [`flatten_value`](Self::flatten_value) with a per-call configuration
    /// layered over the baked-in one.
    pub fn flatten_value_with(
        &self,
        base: Option<&Value>,
        params: Option<&Value>,
        config: &Config,
    ) -> Result<String> {
        let args = ResolvedArgs::resolve(base, params).inspect_err(|e| {
            debug!(error = %e, "rejected responsive class arguments");
        })?;
        let breakpoints = args.entries.len();

        Ok(self.flatten_entries(args.base, args.entries, breakpoints, config))
    }

    /// Layer `config` over the baked-in settings and reduce `entries`.
    fn flatten_entries<I, Q, V>(&self, base: &str, entries: I, breakpoints: usize, config: &Config) -> String
    where
        I: IntoIterator<Item = (Q, V)>,
        Q: AsRef<str>,
        V: AsRef<str>,
    {
        let settings = self.settings().overlay(config);

        trace!(
            breakpoints,
            separator = settings.separator,
            delimiter = settings.delimiter,
            "flattening responsive classes"
        );

        reduce(base, entries, settings)
    }
}

impl<K: AsRef<str>> Twclsx<K> {
    /// Combine `base` with every breakpoint's prefixed classes.
    pub fn flatten<V, S>(&self, base: &str, params: &IndexMap<K, V, S>) -> String
    where
        V: AsRef<str>,
    {
        self.flatten_with(base, params, &Config::default())
    }

    /// Flatten a responsive object without shared classes.
    pub fn responsive<V, S>(&self, params: &IndexMap<K, V, S>) -> String
    where
        V: AsRef<str>,
    {
        self.flatten("", params)
    }

    /// [`flatten`](Self::flatten) with a per-call configuration. Its set
    /// fields win over the baked-in ones.
    pub fn flatten_with<V, S>(&self, base: &str, params: &IndexMap<K, V, S>, config: &Config) -> String
    where
        V: AsRef<str>,
    {
        self.flatten_entries(base, params.iter(), params.len(), config)
    }
}

impl<K> Default for Twclsx<K> {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl<K> Clone for Twclsx<K> {
    fn clone(&self) -> Self {
        Self::new(self.config.clone())
    }
}

impl<K> fmt::Debug for Twclsx<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Twclsx")
            .field("config", &self.config)
            .field("breakpoints", &std::any::type_name::<K>())
            .finish()
    }
}

/// Build a flattener with `config` baked in for every future call.
pub fn configure<K>(config: Config) -> Twclsx<K> {
    Twclsx::new(config)
}

/// Concatenate the breakpoint, separator, and class: `("md", ":", "px-2")` is `md:px-2`.
pub fn prefix(breakpoint: &str, separator: &str, class: &str) -> String {
    let mut prefixed = String::with_capacity(breakpoint.len() + separator.len() + class.len());
    prefixed.push_str(breakpoint);
    prefixed.push_str(separator);
    prefixed.push_str(class);
    prefixed
}

/// Default-configured flattening of `base` and `params`.
pub fn twclsx<K, V, S>(base: &str, params: &IndexMap<K, V, S>) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    reduce(base, params.iter(), DEFAULT_SETTINGS)
}

/// Default-configured flattening of a dynamic call.
pub fn flatten_value(base: Option<&Value>, params: Option<&Value>) -> Result<String> {
    Twclsx::<String>::default().flatten_value(base, params)
}

/// Fold `base` and every breakpoint's prefixed classes into one space joined string.
///
/// Raw mode keeps the base as the first segment even when empty and keeps empty
/// classes; format mode collapses whitespace in each class string before
/// splitting it, then drops classes left empty after trimming.
pub(crate) fn reduce<I, K, V>(base: &str, entries: I, settings: Settings<'_>) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut classes = Vec::new();

    if settings.format {
        let base = format(base);
        if !base.is_empty() {
            classes.push(base);
        }
    } else {
        classes.push(base.to_string());
    }

    for (breakpoint, class_string) in entries {
        let breakpoint = breakpoint.as_ref();

        if settings.format {
            let class_string = format(class_string.as_ref());
            for class in split(&class_string, settings.delimiter) {
                let class = class.trim();
                if !class.is_empty() {
                    classes.push(prefix(breakpoint, settings.separator, class));
                }
            }
            continue;
        }

        for class in split(class_string.as_ref(), settings.delimiter) {
            classes.push(prefix(breakpoint, settings.separator, class));
        }
    }

    classes.join(" ")
}

/// Split on `delimiter`; an empty delimiter yields every character on its own.
fn split<'a>(classes: &'a str, delimiter: &str) -> Vec<&'a str> {
    if delimiter.is_empty() {
        classes
            .char_indices()
            .map(|(i, c)| &classes[i..i + c.len_utf8()])
            .collect()
    } else {
        classes.split(delimiter).collect()
    }
}
