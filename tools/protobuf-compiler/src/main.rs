//! Regenerates the checked-in protobuf types of `assetkit-core` from `proto/`.
//!
//! Requires `buf` in `PATH` or at the path given by the `BUF` environment variable.

use std::{
    env,
    ffi::OsStr,
    fs::{
        read_dir,
        remove_file,
    },
    io::Write as _,
    path::{
        Path,
        PathBuf,
    },
    process::Command,
};

const OUT_DIR: &str = "../../crates/assetkit-core/src/generated";
const SRC_DIR: &str = "../../proto";

const INCLUDES: &[&str] = &[SRC_DIR];

/// Packages whose `bytes` fields are generated as `bytes::Bytes` instead of `Vec<u8>`.
const BYTES_PACKAGES: &[&str] = &[".penumbra.core.asset.v1alpha1"];

/// Packages that get pbjson serde impls.
const JSON_PACKAGES: &[&str] = &[".penumbra.core.asset.v1alpha1", ".penumbra.core.num.v1alpha1"];

fn main() {
    let buf = get_buf_from_env();

    let buf_img = tempfile::NamedTempFile::new()
        .expect("should be able to create a temp file to hold the buf image file descriptor set");

    let crate_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let src_dir = crate_dir.join(SRC_DIR);
    let out_dir = crate_dir.join(OUT_DIR);

    let buf_output = match Command::new(&buf)
        .current_dir(&src_dir)
        .arg("build")
        .arg("--output")
        .arg(buf_img.path())
        .arg("--as-file-descriptor-set")
        .output()
    {
        Err(e) => {
            panic!(
                "failed creating file descriptor set from protobuf: failed to invoke buf (path: \
                 {buf:?}): {e:?}"
            );
        }
        Ok(output) => output,
    };

    emit_buf_stdout(&buf_output.stdout).expect("able to write to stdout");
    emit_buf_stderr(&buf_output.stderr).expect("able to write to stderr");

    assert!(
        buf_output.status.success(),
        "failed creating file descriptor set from protobuf: `buf` returned non-zero exit code"
    );

    let files = find_protos(&src_dir);

    prost_build::Config::new()
        .bytes(BYTES_PACKAGES)
        .type_attribute(".penumbra.core.num.v1alpha1.Amount", "#[derive(Copy)]")
        .enable_type_names()
        .file_descriptor_set_path(buf_img.path())
        .skip_protoc_run()
        .out_dir(&out_dir)
        .compile_protos(&files, INCLUDES)
        .expect("should be able to compile protobuf using prost");

    let descriptor_set = std::fs::read(buf_img.path())
        .expect("the buf image/descriptor set must exist and be readable at this point");

    pbjson_build::Builder::new()
        .register_descriptors(&descriptor_set)
        .expect("the buf image must be a valid file descriptor set")
        .preserve_proto_field_names()
        .out_dir(&out_dir)
        .build(JSON_PACKAGES)
        .expect("should be able to generate serde impls using pbjson");

    remove_foreign_code(&out_dir);
}

fn emit_buf_stdout(buf: &[u8]) -> std::io::Result<()> {
    if !buf.is_empty() {
        std::io::stdout().lock().write_all(buf)?;
        println!();
    }
    Ok(())
}

fn emit_buf_stderr(buf: &[u8]) -> std::io::Result<()> {
    if !buf.is_empty() {
        std::io::stderr().lock().write_all(buf)?;
        eprintln!();
    }
    Ok(())
}

/// Removes generated files of packages other than `penumbra.*`.
///
/// `mod.rs` is maintained by hand and kept.
fn remove_foreign_code(out_dir: &Path) {
    for entry in read_dir(out_dir)
        .expect("should be able to read target folder for generated files")
        .flatten()
    {
        let path = entry.path();
        let name = path
            .file_name()
            .expect("generated file should have a file name")
            .to_string_lossy();
        if name != "mod.rs" && !name.starts_with("penumbra.") {
            remove_file(&path).expect("should be able to remove foreign generated file");
        }
    }
}

fn find_protos<P: AsRef<Path>>(dir: P) -> Vec<PathBuf> {
    use walkdir::{
        DirEntry,
        WalkDir,
    };
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file() && e.path().extension() == Some(OsStr::new("proto")))
        .map(DirEntry::into_path)
        .collect()
}

fn get_buf_from_env() -> PathBuf {
    let os_specific_hint = match env::consts::OS {
        "macos" => {
            "You could try running `brew install buf` or downloading a recent release from \
             https://github.com/bufbuild/buf/releases"
        }
        "linux" => "You can download it from https://github.com/bufbuild/buf/releases",
        _other => {
            "Check if there is a precompiled version for your OS at \
             https://github.com/bufbuild/buf/releases"
        }
    };
    let error_msg = "Could not find `buf` installation and this build crate cannot proceed \
                     without this knowledge. If `buf` is installed and this crate had trouble \
                     finding it, you can set the `BUF` environment variable with the specific \
                     path to your installed `buf` binary.";
    let msg = format!("{error_msg} {os_specific_hint}");

    env::var_os("BUF")
        .map(PathBuf::from)
        .or_else(|| which::which("buf").ok())
        .expect(&msg)
}
