use std::io::Write as _;

use assert_cmd::Command;
use predicates::prelude::*;

const UPENUMBRA_ID: &str = "passet1n3wtmycv7yyjeenwzz4sn9cyuck3evjysqfnhd7nwfs9akw7v7gs2smltn";
const UPENUMBRA_ENCODED_ID: &str = "CiCcXL2TDPEJLOZuEKsJlwTmLRyyRIATO7fTcmBe2d5nkQ==";
const ONE_AND_A_HALF_PENUMBRA: &str = "CgQI4MZbEiIKIJxcvZMM8Qks5m4QqwmXBOYtHLJEgBM7t9NyYF7Z3meR";

fn assetkit_utils() -> Command {
    let mut cmd = Command::cargo_bin("assetkit-utils").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("ASSETKIT_UTILS_LOG")
        .env_remove("ASSETKIT_UTILS_PRETTY_JSON")
        .env_remove("ASSETKIT_UTILS_ASSET_REGISTRY");
    cmd
}

#[test]
fn asset_id_prints_bech32m_and_encoded_message() {
    assetkit_utils()
        .arg("asset-id")
        .arg("upenumbra")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Asset ID: {UPENUMBRA_ID}")))
        .stdout(predicate::str::contains(format!(
            "Encoded AssetId: {UPENUMBRA_ENCODED_ID}"
        )));
}

#[test]
fn asset_id_accepts_ibc_hash_denom() {
    let denom = "ibc/27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2";
    assetkit_utils()
        .arg("asset-id")
        .arg(denom)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Denom: {denom}")))
        .stdout(predicate::str::contains(
            "Asset ID: passet1yxgdf0f6m0l6vsgh6pszt7gu2g57gr4skt60uwc9f9j26rm7ng7s9rkjuk",
        ));
}

#[test]
fn asset_id_rejects_invalid_denom() {
    assetkit_utils()
        .arg("asset-id")
        .arg("path/denom")
        .assert()
        .failure()
        .stderr(predicate::str::contains(r#"{"0": "`path/denom` is not a valid denomination""#));
}

#[test]
fn parse_asset_id_resolves_known_denom() {
    assetkit_utils()
        .arg("parse-asset-id")
        .arg(UPENUMBRA_ENCODED_ID)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#""inner": "nFy9kwzxCSzmbhCrCZcE5i0cskSAEzu303JgXtneZ5E=""#,
        ))
        .stdout(predicate::str::contains(format!("Asset ID: {UPENUMBRA_ID}")))
        .stdout(predicate::str::contains("Denom: upenumbra"));
}

#[test]
fn compact_json_is_configurable() {
    assetkit_utils()
        .env("ASSETKIT_UTILS_PRETTY_JSON", "false")
        .arg("parse-asset-id")
        .arg(UPENUMBRA_ENCODED_ID)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"inner":"nFy9kwzxCSzmbhCrCZcE5i0cskSAEzu303JgXtneZ5E="}"#,
        ));
}

#[test]
fn encode_value_parses_display_units() {
    assetkit_utils()
        .arg("encode-value")
        .arg("1.5penumbra")
        .assert()
        .success()
        .stdout(format!("{ONE_AND_A_HALF_PENUMBRA}\n"));
}

#[test]
fn encode_value_rejects_unknown_unit() {
    assetkit_utils()
        .arg("encode-value")
        .arg("1.5gm")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse `1.5gm` as a value"));
}

#[test]
fn parse_value_formats_known_assets() {
    assetkit_utils()
        .arg("parse-value")
        .arg(ONE_AND_A_HALF_PENUMBRA)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""lo": "1500000""#))
        .stdout(predicate::str::contains("Value: 1.5penumbra"))
        .stdout(predicate::str::contains(format!("Asset ID: {UPENUMBRA_ID}")));
}

#[test]
fn parse_value_view_reads_stdin() {
    assetkit_utils()
        .arg("parse-value")
        .arg("--view")
        .arg("-")
        .write_stdin("EigKAggHEiIKICoqKioqKioqKioqKioqKioqKioqKioqKioqKioqKioq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown_denom"))
        .stdout(predicate::str::contains(
            "Value: 7passet19g4z52329g4z52329g4z52329g4z52329g4z52329g4z52329g4q89q4m4",
        ));
}

#[test]
fn metadata_is_found_by_unit() {
    assetkit_utils()
        .arg("metadata")
        .arg("mpenumbra")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""base": "upenumbra""#))
        .stdout(predicate::str::contains(r#""display": "penumbra""#));
}

#[test]
fn metadata_of_unknown_denom_fails() {
    assetkit_utils()
        .arg("metadata")
        .arg("uatom")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "`uatom` is not a known denomination or unit",
        ));
}

#[test]
fn registry_extends_known_assets() {
    let mut registry = tempfile::NamedTempFile::new().unwrap();
    write!(
        registry,
        r#"[{{
            "base": "transfer/channel-0/uatom",
            "display": "atom",
            "denom_units": [
                {{"denom": "transfer/channel-0/uatom"}},
                {{"denom": "atom", "exponent": 6}}
            ]
        }}]"#
    )
    .unwrap();

    assetkit_utils()
        .arg("encode-value")
        .arg("2atom")
        .arg("--registry")
        .arg(registry.path())
        .assert()
        .success()
        .stdout("CgQIgIl6EiIKICc5T7CS0uzNVhI8dPNuTB+SYAHOranKl+piKyX0Hl6y\n");

    assetkit_utils()
        .env("ASSETKIT_UTILS_ASSET_REGISTRY", registry.path())
        .arg("metadata")
        .arg("atom")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#""base": "transfer/channel-0/uatom""#,
        ));
}
