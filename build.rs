// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Embeds the git SHA and commit date shown in `commit-msg --debug` output.

use vergen::EmitBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=build.rs");

    // Outside a git checkout vergen emits placeholder values instead of failing.
    EmitBuilder::builder()
        .git_sha(true)
        .git_commit_date()
        .emit()?;
    Ok(())
}
