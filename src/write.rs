extern crate termcolor;

use std::io::Write;
use termcolor::{Color, StandardStream, WriteColor};
use wpcs2_client::SubmissionResult;

pub fn write_result(stdout: &mut StandardStream, result: &SubmissionResult) {
    if result.is_zero() {
        write_warn!(
            stdout,
            "Warning",
            "Empty submission result, the judge response may not have been understood"
        );
    } else {
        write_ok!(
            stdout,
            "Submitted",
            "#{} problem {} data set {}",
            result.id,
            result.problem_id,
            result.data_set_id
        );
    }
    write_info!(stdout, "Status", "{}", result.judge_status);
    write_info!(stdout, "Score", "{}", result.score);
    if let Some(t) = result.created_at {
        write_info!(stdout, "Created", "{}", t.to_rfc3339());
    }
    let _ = stdout.reset();
}
