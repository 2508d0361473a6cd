//! Building selective-execution requests.

use wl_core::{InvocationRequest, InvocationSelection};

/// Plan an invocation of `compilation` with the given selection.
///
/// An entirely empty selection (no targets, no tags, no run-as override)
/// produces a request with no selection object at all: on the remote side,
/// "run everything" is the absence of a selection, not an empty one. Bare
/// and qualified targets pass through unchanged; missing qualifiers are
/// never defaulted to empty strings, which could accidentally match
/// unrelated objects.
pub fn plan(compilation: &str, selection: InvocationSelection) -> InvocationRequest {
    InvocationRequest {
        compilation: compilation.to_string(),
        selection: if selection.is_empty() {
            None
        } else {
            Some(selection)
        },
    }
}

#[cfg(test)]
#[path = "planner_test.rs"]
mod tests;
