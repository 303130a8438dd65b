//! Пакетная конвертация картинок сайта в WebP через внешний ffmpeg.
//!
//! Сканируется один каталог (без рекурсии). Для каждого `.png/.jpg/.jpeg`
//! без готового `.webp`-соседа запускается
//! `ffmpeg -i <in> -c:v libwebp -quality <q> <out> -y`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::process::Command;
use tokio::task::JoinSet;

pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

#[derive(Debug, Error)]
pub enum OptimizeError {
    #[error("Directory not found: {0}")]
    DirNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Что будет сделано с каталогом
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ConversionPlan {
    pub jobs: Vec<ConversionJob>,
    /// Inputs whose `.webp` already exists.
    pub skipped: Vec<PathBuf>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OptimizeSummary {
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// `None` for files that are not convertible images.
pub fn webp_target(input: &Path) -> Option<PathBuf> {
    let ext = input.extension()?.to_str()?.to_ascii_lowercase();
    if SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
        Some(input.with_extension("webp"))
    } else {
        None
    }
}

pub fn plan_conversions(dir: &Path) -> Result<ConversionPlan, OptimizeError> {
    if !dir.is_dir() {
        return Err(OptimizeError::DirNotFound(dir.to_path_buf()));
    }

    let mut entries = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect::<Vec<_>>();
    entries.sort();

    let mut plan = ConversionPlan::default();
    for input in entries {
        let Some(output) = webp_target(&input) else {
            continue;
        };
        if output.exists() {
            plan.skipped.push(input);
        } else {
            plan.jobs.push(ConversionJob { input, output });
        }
    }
    Ok(plan)
}

pub fn encoder_args(job: &ConversionJob, quality: u8) -> Vec<OsString> {
    vec![
        "-i".into(),
        job.input.clone().into_os_string(),
        "-c:v".into(),
        "libwebp".into(),
        "-quality".into(),
        quality.to_string().into(),
        job.output.clone().into_os_string(),
        "-y".into(),
    ]
}

/// Runs all conversions concurrently. A failed file is logged and counted,
/// it does not stop the batch.
pub async fn run(
    dir: &Path,
    quality: u8,
    encoder: &str,
) -> Result<OptimizeSummary, OptimizeError> {
    let plan = plan_conversions(dir)?;
    let mut summary = OptimizeSummary {
        skipped: plan.skipped.len(),
        ..Default::default()
    };

    for skipped in &plan.skipped {
        tracing::info!("Skipping {}, WebP version already exists", display_name(skipped));
    }

    let mut tasks = JoinSet::new();
    for job in plan.jobs {
        let encoder = encoder.to_string();
        tasks.spawn(async move {
            let result = Command::new(&encoder)
                .args(encoder_args(&job, quality))
                .output()
                .await;
            (job, result)
        });
    }

    while let Some(joined) = tasks.join_next().await {
        let (job, result) = match joined {
            Ok(done) => done,
            Err(e) => {
                tracing::error!("Conversion task aborted: {}", e);
                summary.failed += 1;
                continue;
            }
        };

        match result {
            Ok(output) if output.status.success() => {
                tracing::info!(
                    "Optimized: {} -> {}",
                    display_name(&job.input),
                    display_name(&job.output)
                );
                summary.converted += 1;
            }
            Ok(output) => {
                tracing::error!(
                    "Error optimizing {}: {} {}",
                    display_name(&job.input),
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                );
                summary.failed += 1;
            }
            Err(e) => {
                tracing::error!("Error optimizing {}: {}", display_name(&job.input), e);
                summary.failed += 1;
            }
        }
    }

    tracing::info!(
        "Images: {} converted, {} skipped, {} failed",
        summary.converted,
        summary.skipped,
        summary.failed
    );
    Ok(summary)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"x").unwrap();
    }

    #[test]
    fn test_webp_target() {
        assert_eq!(
            webp_target(Path::new("/img/shibam.JPG")),
            Some(PathBuf::from("/img/shibam.webp"))
        );
        assert_eq!(
            webp_target(Path::new("hero.jpeg")),
            Some(PathBuf::from("hero.webp"))
        );
        assert_eq!(webp_target(Path::new("hero.webp")), None);
        assert_eq!(webp_target(Path::new("notes.txt")), None);
        assert_eq!(webp_target(Path::new("README")), None);
    }

    #[test]
    fn test_plan_skips_existing_and_ignores_others() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path();
        touch(dir, "aden.png");
        touch(dir, "mocha.jpg");
        touch(dir, "mocha.webp");
        touch(dir, "socotra.JPEG");
        touch(dir, "notes.txt");
        fs::create_dir(dir.join("nested.png")).unwrap();

        let plan = plan_conversions(dir).unwrap();
        let inputs: Vec<_> = plan
            .jobs
            .iter()
            .map(|job| job.input.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(inputs, vec!["aden.png", "socotra.JPEG"]);
        assert_eq!(plan.jobs[1].output, dir.join("socotra.webp"));
        assert_eq!(plan.skipped, vec![dir.join("mocha.jpg")]);
    }

    #[test]
    fn test_plan_missing_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("nope");
        assert!(matches!(
            plan_conversions(&missing),
            Err(OptimizeError::DirNotFound(_))
        ));
    }

    #[test]
    fn test_encoder_args() {
        let job = ConversionJob {
            input: PathBuf::from("in.png"),
            output: PathBuf::from("in.webp"),
        };
        let args: Vec<String> = encoder_args(&job, 80)
            .into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            args,
            ["-i", "in.png", "-c:v", "libwebp", "-quality", "80", "in.webp", "-y"]
        );
    }

    #[tokio::test]
    async fn test_run_counts_failures_without_aborting() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "a.png");
        touch(tmp.path(), "b.jpg");
        touch(tmp.path(), "c.png");
        touch(tmp.path(), "c.webp");

        let summary = run(tmp.path(), 80, "definitely-not-an-image-encoder")
            .await
            .unwrap();
        assert_eq!(
            summary,
            OptimizeSummary {
                converted: 0,
                skipped: 1,
                failed: 2
            }
        );
    }
}
