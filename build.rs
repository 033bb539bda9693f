extern crate vergen_gitcl;
use anyhow::Result;
use vergen_gitcl::{BuildBuilder, Emitter, GitclBuilder};

fn main() -> Result<()> {
    emit_version_info()?;
    Ok(())
}

// `tb info` reads VERGEN_BUILD_DATE and VERGEN_GIT_SHA.
fn emit_version_info() -> Result<()> {
    let build = BuildBuilder::all_build()?;
    let git = GitclBuilder::all_git()?;

    Emitter::default()
        .add_instructions(&build)?
        .add_instructions(&git)?
        .emit()?;

    Ok(())
}
