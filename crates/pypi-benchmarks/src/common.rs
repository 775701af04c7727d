//! Common utilities for benchmarks

use std::time::Duration;

use criterion::Criterion;
use pprof::criterion::{Output, PProfProfiler};

/// Criterion settings shared by the escape and decode suites.
///
/// Escaping and request building run in well under a microsecond, so a
/// short warm-up with a larger sample gives stable numbers; decode groups
/// override the sample size where one iteration is slow.
pub fn criterion_config() -> Criterion {
    Criterion::default()
        .warm_up_time(Duration::from_secs(1))
        .measurement_time(Duration::from_secs(5))
        .sample_size(200)
        .noise_threshold(0.03)
        .with_profiler(PProfProfiler::new(1000, Output::Flamegraph(None)))
}

/// Build a project document with `release_count` releases of two files each
pub fn project_document(release_count: usize) -> String {
    let file = |version: &str, filename: String, packagetype: &str| {
        serde_json::json!({
            "filename": filename,
            "url": format!("https://files.pythonhosted.org/packages/xx/{}", version),
            "size": 62574,
            "digests": {
                "md5": "02c1d3b8c4a1b5c4e2f9b6a4d1e3f7c8",
                "sha256": "58cd2187c01e70e6e26505bca751777aa9f2ee0b7f4300988b709f44e013003f"
            },
            "packagetype": packagetype,
            "python_version": "py3",
            "requires_python": ">=3.7",
            "upload_time": "2023-05-22T15:12:42",
            "upload_time_iso_8601": "2023-05-22T15:12:42.313790Z",
            "has_sig": false,
            "yanked": false,
            "yanked_reason": null
        })
    };

    let mut releases = serde_json::Map::new();
    for i in 0..release_count {
        let version = format!("1.{}.0", i);
        releases.insert(
            version.clone(),
            serde_json::json!([
                file(&version, format!("demo-{}.tar.gz", version), "sdist"),
                file(&version, format!("demo-{}-py3-none-any.whl", version), "bdist_wheel"),
            ]),
        );
    }

    serde_json::json!({
        "info": {
            "name": "demo",
            "version": format!("1.{}.0", release_count.saturating_sub(1)),
            "summary": "Benchmark fixture",
            "author": "Bench Author",
            "classifiers": [
                "License :: OSI Approved :: MIT License",
                "Programming Language :: Python :: 3"
            ],
            "requires_dist": ["idna<4,>=2.5", "urllib3<3,>=1.21.1"],
            "requires_python": ">=3.7",
            "project_urls": {"Source": "https://example.com/demo"}
        },
        "last_serial": 19283746,
        "releases": releases,
        "urls": []
    })
    .to_string()
}
