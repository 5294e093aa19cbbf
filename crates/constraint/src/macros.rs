//! Macros for declaring predicates and composing constraints.
//!
//! # Available Macros
//!
//! - [`predicate!`]: Declare a predicate (struct + `Predicate` impl + factory fn)
//! - [`all_of!`]: Box heterogeneous constraints into an all-of compound
//! - [`any_of!`]: Box heterogeneous constraints into an any-of compound
//!
//! # Examples
//!
//! ```rust,ignore
//! use rampart_constraint::predicate;
//!
//! // Unit predicate (no fields)
//! predicate! {
//!     pub NotBlank for str;
//!     rule(input) { !input.trim().is_empty() }
//!     fn not_blank();
//! }
//!
//! // Struct with fields
//! predicate! {
//!     pub MultipleOf { divisor: u64 } for u64;
//!     rule(self, input) { input % self.divisor == 0 }
//!     fn multiple_of(divisor: u64);
//! }
//! ```

// ============================================================================
// PREDICATE MACRO
// ============================================================================

/// Declares a predicate: struct definition, `Predicate` implementation and a
/// factory function.
///
/// Unit predicates always derive `Debug, Clone, Copy, Default, PartialEq, Eq,
/// Hash`. Predicates with fields derive `Debug, Clone`; add extra derives via
/// `#[derive(...)]`.
///
/// # Variants
///
/// **Unit predicate** (zero-sized, no fields):
/// ```rust,ignore
/// predicate! {
///     pub NotBlank for str;
///     rule(input) { !input.trim().is_empty() }
///     fn not_blank();
/// }
/// ```
///
/// **Struct with fields** (the factory takes every field in order):
/// ```rust,ignore
/// predicate! {
///     #[derive(Copy, PartialEq, Eq)]
///     pub MultipleOf { divisor: u64 } for u64;
///     rule(self, input) { input % self.divisor == 0 }
///     fn multiple_of(divisor: u64);
/// }
/// ```
#[macro_export]
macro_rules! predicate {
    // ── Unit predicate + factory fn ──────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Predicate for $name {
            type Input = $input;

            fn evaluate(&self, $inp: &Self::Input) -> bool {
                $rule
            }
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Struct with fields + factory fn ──────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $($field: $fty),+
        }

        impl $crate::foundation::Predicate for $name {
            type Input = $input;

            fn evaluate(&$self_, $inp: &Self::Input) -> bool {
                $rule
            }
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name { $($field: $farg),+ }
        }
    };
}

// ============================================================================
// COMPOSITION MACROS
// ============================================================================

/// Builds an all-of [`CompoundConstraint`](crate::combinators::CompoundConstraint)
/// from constraints of different concrete types.
///
/// ```rust,ignore
/// let password = all_of![
///     min_length(8).with_error("short"),
///     CharacterSet::ascii_digits().loose().with_error("digit"),
/// ];
/// ```
#[macro_export]
macro_rules! all_of {
    ($($constraint:expr),* $(,)?) => {
        $crate::combinators::CompoundConstraint::all_of(
            ::std::vec![$($crate::foundation::ConstraintExt::boxed($constraint)),*]
        )
    };
}

/// Builds an any-of [`CompoundConstraint`](crate::combinators::CompoundConstraint)
/// from constraints of different concrete types.
#[macro_export]
macro_rules! any_of {
    ($($constraint:expr),* $(,)?) => {
        $crate::combinators::CompoundConstraint::any_of(
            ::std::vec![$($crate::foundation::ConstraintExt::boxed($constraint)),*]
        )
    };
}
