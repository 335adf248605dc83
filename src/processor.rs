//! Vector-set driver.
//!
//! Groups run in order, cases within a group run in order, and the first
//! error anywhere ends the run. A failed run returns the error and nothing
//! else: ACVP treats a bad fixture or a backend fault as a harness bug, so a
//! partially answered vector set is never handed back.

use crate::error::KdaError;
use crate::executor::{execute, TestKind};
use crate::transact::Transactable;
use crate::wire::{self, TestGroupResponse, VectorSet};

/// Answer every group of a parsed vector set.
pub fn process_vector_set(
    set: &VectorSet,
    backend: &dyn Transactable,
) -> Result<Vec<TestGroupResponse>, KdaError> {
    let mut groups = Vec::with_capacity(set.groups.len());

    for group in &set.groups {
        let kind = TestKind::parse(&group.test_type)?;
        let params = group.config.extract()?;

        tracing::debug!(
            tg_id = group.id,
            test_type = %group.test_type,
            hmac = %params.hash_name,
            output_bytes = params.output_bytes,
            cases = group.tests.len(),
            "processing group"
        );

        let mut tests = Vec::with_capacity(group.tests.len());
        for test in &group.tests {
            tests.push(execute(test, &params, kind, backend)?);
        }

        groups.push(TestGroupResponse { id: group.id, tests });
    }

    Ok(groups)
}

/// Parse raw vector-set JSON and answer it.
pub fn process(data: &[u8], backend: &dyn Transactable) -> Result<Vec<TestGroupResponse>, KdaError> {
    let set = wire::parse_vector_set(data)?;
    process_vector_set(&set, backend)
}

/// JSON in, JSON out.
pub fn process_json(data: &[u8], backend: &dyn Transactable) -> Result<Vec<u8>, KdaError> {
    let groups = process(data, backend)?;
    wire::encode_responses(&groups)
}
