//! Formal verification for the error type using Kani.
//!
//! These proofs only run with `cargo kani --features kani`.

/// Proof harnesses for constructors and predicates
#[cfg(kani)]
pub mod kani_verification {
    use crate::{codes, Error, ErrorCategory, ErrorSource};

    /// Verify that every constructor pairs its code with the right category
    #[kani::proof]
    pub fn verify_error_creation_safety() {
        let errors = [
            (Error::null_reference("r"), ErrorCategory::Parameter, codes::NULL_REFERENCE),
            (Error::null_output("o"), ErrorCategory::Parameter, codes::NULL_OUTPUT),
            (Error::null_node("n"), ErrorCategory::Parameter, codes::NULL_NODE),
            (Error::capacity_exceeded("c"), ErrorCategory::Capacity, codes::CAPACITY_EXCEEDED),
            (Error::container_empty("e"), ErrorCategory::State, codes::CONTAINER_EMPTY),
            (Error::node_already_linked("l"), ErrorCategory::State, codes::NODE_ALREADY_LINKED),
            (Error::lock_contended("m"), ErrorCategory::State, codes::LOCK_CONTENDED),
        ];

        for (error, category, code) in errors {
            assert!(error.category == category);
            assert!(error.code() == code);
        }
    }

    /// Verify that the predicates agree with an arbitrary code
    #[kani::proof]
    pub fn verify_error_predicates() {
        let code: u16 = kani::any();
        let error = Error::new(ErrorCategory::State, code, "any");

        assert!(error.is_container_empty() == (code == codes::CONTAINER_EMPTY));
        assert!(error.is_null_reference() == (code == codes::NULL_REFERENCE));
        assert!(error.is_capacity_exceeded() == (code == codes::CAPACITY_EXCEEDED));
        assert!(!error.is_parameter_error());
    }
}
