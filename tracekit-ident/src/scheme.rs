use std::env;

use crate::Factory;

/// Environment variable naming the identifier scheme (`single` or `double`).
const SCHEME_ENV: &str = "TRACEKIT_ID_SCHEME";

/// The pair of factories a tracer draws its identifiers from.
///
/// A scheme is chosen once at tracer-configuration time and never changes
/// for the lifetime of that tracer. [`SINGLE`] keeps every identifier at 8
/// bytes; [`DOUBLE`] widens trace identifiers to 16 bytes for
/// interoperability with propagation formats built around 128-bit trace
/// identifiers. Any other pairing can be built with [`new`].
///
/// [`SINGLE`]: Scheme::SINGLE
/// [`DOUBLE`]: Scheme::DOUBLE
/// [`new`]: Scheme::new
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scheme {
    /// Factory for the identifier shared by all spans of one trace.
    pub trace_id_factory: Factory,
    /// Factory for the identifier of a single unit of work.
    pub span_id_factory: Factory,
}

impl Scheme {
    /// 8-byte trace identifiers, 8-byte span identifiers.
    pub const SINGLE: Scheme = Scheme::new(Factory::EightBytes, Factory::EightBytes);

    /// 16-byte trace identifiers, 8-byte span identifiers.
    pub const DOUBLE: Scheme = Scheme::new(Factory::SixteenBytes, Factory::EightBytes);

    /// Pairs any two factories into a scheme.
    pub const fn new(trace_id_factory: Factory, span_id_factory: Factory) -> Self {
        Scheme {
            trace_id_factory,
            span_id_factory,
        }
    }

    /// Looks up a predefined scheme by its configuration name.
    ///
    /// Names are matched ASCII case-insensitively; unknown names return
    /// `None`.
    pub fn from_name(name: &str) -> Option<Scheme> {
        if name.eq_ignore_ascii_case("single") {
            Some(Scheme::SINGLE)
        } else if name.eq_ignore_ascii_case("double") {
            Some(Scheme::DOUBLE)
        } else {
            None
        }
    }

    /// Reads the scheme from the `TRACEKIT_ID_SCHEME` environment variable.
    ///
    /// Unset selects [`Scheme::SINGLE`]. Unrecognized values log a warning
    /// and select [`Scheme::SINGLE`] as well.
    pub fn from_env() -> Scheme {
        match env::var(SCHEME_ENV) {
            Ok(name) => Scheme::from_name(&name).unwrap_or_else(|| {
                crate::ident_warn!(
                    name: "Scheme.FromEnv.UnrecognizedName",
                    message = format!(
                        "'{name}' is not a known identifier scheme, expected 'single' or 'double', using 'single'"
                    )
                );
                Scheme::SINGLE
            }),
            Err(_) => Scheme::SINGLE,
        }
    }
}

impl Default for Scheme {
    fn default() -> Self {
        Scheme::SINGLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_keeps_both_roles_narrow() {
        let trace_id = Scheme::SINGLE.trace_id_factory.generate();
        let span_id = Scheme::SINGLE.span_id_factory.generate();

        assert_eq!(trace_id.as_str().len(), 16);
        assert_eq!(trace_id.as_bytes().len(), 8);
        assert_eq!(span_id.as_str().len(), 16);
        assert_eq!(span_id.as_bytes().len(), 8);
    }

    #[test]
    fn double_widens_trace_identifiers_only() {
        let trace_id = Scheme::DOUBLE.trace_id_factory.generate();
        let span_id = Scheme::DOUBLE.span_id_factory.generate();

        assert_eq!(trace_id.as_str().len(), 32);
        assert_eq!(trace_id.as_bytes().len(), 16);
        assert_eq!(span_id.as_str().len(), 16);
        assert_eq!(span_id.as_bytes().len(), 8);
    }

    #[test]
    fn custom_pairings_are_allowed() {
        let wide = Scheme::new(Factory::SixteenBytes, Factory::SixteenBytes);
        assert_eq!(wide.span_id_factory.generate().as_bytes().len(), 16);
    }

    #[test]
    fn names_select_schemes() {
        assert_eq!(Scheme::from_name("single"), Some(Scheme::SINGLE));
        assert_eq!(Scheme::from_name("double"), Some(Scheme::DOUBLE));
        assert_eq!(Scheme::from_name("Double"), Some(Scheme::DOUBLE));
        assert_eq!(Scheme::from_name("triple"), None);
        assert_eq!(Scheme::from_name(""), None);
    }

    #[test]
    fn env_selects_scheme() {
        temp_env::with_var(super::SCHEME_ENV, Some("double"), || {
            assert_eq!(Scheme::from_env(), Scheme::DOUBLE);
        });
        temp_env::with_var(super::SCHEME_ENV, Some("unknown"), || {
            assert_eq!(Scheme::from_env(), Scheme::SINGLE);
        });
        temp_env::with_var(super::SCHEME_ENV, None::<&str>, || {
            assert_eq!(Scheme::from_env(), Scheme::SINGLE);
        });
    }
}
