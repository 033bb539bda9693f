use taskboard_cli::{exec, BuildInfo};
use taskboard_common::error;

#[tokio::main]
async fn main() {
    let build = BuildInfo {
        version: env!("CARGO_PKG_VERSION"),
        build_date: option_env!("VERGEN_BUILD_DATE"),
        git_sha: option_env!("VERGEN_GIT_SHA"),
    };

    if let Err(e) = exec(build).await {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}
