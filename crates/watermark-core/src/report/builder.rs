//! Option-driven report assembly.
//!
//! The builder asks each collaborator only for what the options request and
//! appends sections in a fixed order. Collaborator failures never abort the
//! report: they are logged and replaced by placeholder values.

use std::cell::OnceCell;
use std::sync::Arc;

use tracing::{debug, warn};

use super::timestamp::{iso_timestamp, last_updated};
use crate::domain::{
    HostInfo, PackageRequest, PythonInfo, Report, Section, VersionLookup, imported_top_level,
};
use crate::options::WatermarkOptions;
use crate::ports::{ClockPort, CoreError, GitPort, GitQuery, HostProbePort, InterpreterPort};

/// Value shown for a git fact that could not be read.
pub const GIT_UNAVAILABLE: &str = "unavailable";

const LAST_UPDATED: &str = "Last updated";

/// Collaborators the builder queries.
#[derive(Clone)]
pub struct ReportPorts {
    pub interpreter: Arc<dyn InterpreterPort>,
    pub host: Arc<dyn HostProbePort>,
    pub git: Arc<dyn GitPort>,
    pub clock: Arc<dyn ClockPort>,
}

/// Builds a [`Report`] from [`WatermarkOptions`].
///
/// Each call to [`ReportBuilder::build`] is independent; nothing is cached
/// across calls.
pub struct ReportBuilder {
    ports: ReportPorts,
    tool_version: String,
}

/// Per-build memo so the interpreter and host are probed at most once.
#[derive(Default)]
struct Probed {
    python: OnceCell<Option<PythonInfo>>,
    host: OnceCell<HostInfo>,
}

impl ReportBuilder {
    /// Create a builder. `tool_version` fills the "Watermark" section.
    pub fn new(ports: ReportPorts, tool_version: impl Into<String>) -> Self {
        Self {
            ports,
            tool_version: tool_version.into(),
        }
    }

    /// Assemble the report selected by `options`.
    ///
    /// Only invalid options produce an error.
    pub fn build(&self, options: &WatermarkOptions) -> Result<Report, CoreError> {
        options.validate()?;
        let probed = Probed::default();
        let mut report = Report::new();

        if options.is_default() {
            debug!("No options set, building default report");
            let now = self.ports.clock.now();
            report.push(Section::single(LAST_UPDATED, iso_timestamp(&now)));
            report.push(self.python_section(&probed));
            report.push(self.system_section(&probed));
            return Ok(report);
        }

        let mut sections = Vec::new();

        if let Some(author) = options.author_name() {
            sections.push(Section::single("Author", author));
        }
        if options.wants_timestamp() {
            let value = last_updated(options, &self.ports.clock.now())?;
            if !value.is_empty() {
                sections.push(Section::single(LAST_UPDATED, value));
            }
        }
        if options.python {
            sections.push(self.python_section(&probed));
        }
        if let Some(list) = options.packages.as_deref() {
            sections.push(self.packages_section(&PackageRequest::parse_list(list)));
        }
        if options.machine {
            sections.push(self.system_section(&probed));
        }
        if options.hostname {
            sections.push(Section::single("Hostname", &self.host(&probed).hostname));
        }
        for (requested, query) in [
            (options.githash, GitQuery::CommitHash),
            (options.gitrepo, GitQuery::RemoteOrigin),
            (options.gitbranch, GitQuery::Branch),
        ] {
            if requested {
                sections.push(self.git_section(query));
            }
        }
        if !options.iversions.is_empty() {
            sections.push(self.imported_versions_section(&options.iversions));
        }
        if options.watermark {
            sections.push(Section::single("Watermark", &self.tool_version));
        }

        for section in sections.into_iter().filter(|s| !s.is_empty()) {
            report.push(section);
        }
        Ok(report)
    }

    fn python<'a>(&self, probed: &'a Probed) -> Option<&'a PythonInfo> {
        probed
            .python
            .get_or_init(|| match self.ports.interpreter.python_info() {
                Ok(info) => {
                    debug!(version = %info.version, "Probed Python interpreter");
                    Some(info)
                }
                Err(e) => {
                    warn!(error = %e, "Python interpreter unavailable");
                    None
                }
            })
            .as_ref()
    }

    fn host<'a>(&self, probed: &'a Probed) -> &'a HostInfo {
        probed.host.get_or_init(|| self.ports.host.host_info())
    }

    fn python_section(&self, probed: &Probed) -> Section {
        let Some(info) = self.python(probed) else {
            return Section::single("Python version", VersionLookup::NotInstalled.to_string());
        };

        let mut section = Section::new()
            .with("Python implementation", &info.implementation)
            .with("Python version", &info.version);
        if let VersionLookup::Found(ipython) = &info.ipython {
            section.insert("IPython version", ipython);
        }
        section
    }

    fn system_section(&self, probed: &Probed) -> Section {
        let python = self.python(probed);
        let host = self.host(probed);

        let mut section = Section::new();
        if let Some(info) = python {
            section.insert("Compiler", &info.compiler);
        }
        section.insert("OS", &host.os);
        section.insert("Release", &host.release);
        section.insert("Machine", &host.machine);
        section.insert("Processor", &host.processor);
        section.insert("CPU cores", host.cpu_cores.to_string());
        let architecture =
            python.map_or_else(|| format!("{}bit", usize::BITS), |info| info.architecture.clone());
        section.insert("Architecture", architecture);
        section
    }

    fn lookup(&self, requests: &[PackageRequest]) -> Vec<VersionLookup> {
        if requests.is_empty() {
            return Vec::new();
        }
        debug!(count = requests.len(), "Resolving package versions");
        match self.ports.interpreter.package_versions(requests) {
            Ok(mut versions) => {
                versions.resize(requests.len(), VersionLookup::Unknown);
                versions
            }
            Err(e) => {
                warn!(error = %e, "Package lookup failed, reporting packages as not installed");
                vec![VersionLookup::NotInstalled; requests.len()]
            }
        }
    }

    fn packages_section(&self, requests: &[PackageRequest]) -> Section {
        requests
            .iter()
            .zip(self.lookup(requests))
            .map(|(request, version)| (request.name.clone(), version.to_string()))
            .collect()
    }

    fn imported_versions_section(&self, modules: &[String]) -> Section {
        let requests: Vec<PackageRequest> = imported_top_level(modules)
            .into_iter()
            .map(PackageRequest::new)
            .collect();

        requests
            .iter()
            .zip(self.lookup(&requests))
            .filter_map(|(request, version)| match version {
                VersionLookup::Found(v) => Some((request.name.clone(), v)),
                VersionLookup::NotInstalled | VersionLookup::Unknown => None,
            })
            .collect()
    }

    fn git_section(&self, query: GitQuery) -> Section {
        let value = match self.ports.git.query(query) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, query = ?query, "Git query failed");
                GIT_UNAVAILABLE.to_string()
            }
        };
        Section::single(query.label(), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{
        GitError, InterpreterError, MockClockPort, MockGitPort, MockHostProbePort,
        MockInterpreterPort,
    };
    use chrono::{DateTime, FixedOffset, TimeZone};

    fn fixed_now() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
            .unwrap()
    }

    fn python_info() -> PythonInfo {
        PythonInfo {
            implementation: "CPython".into(),
            version: "3.11.4".into(),
            compiler: "GCC 11.4.0".into(),
            architecture: "64bit".into(),
            ipython: VersionLookup::Found("8.14.0".into()),
        }
    }

    fn host_info() -> HostInfo {
        HostInfo {
            os: "Linux".into(),
            release: "6.5.0".into(),
            machine: "x86_64".into(),
            processor: "Test CPU".into(),
            cpu_cores: 8,
            hostname: "lab-01".into(),
        }
    }

    struct Mocks {
        interpreter: MockInterpreterPort,
        host: MockHostProbePort,
        git: MockGitPort,
        clock: MockClockPort,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                interpreter: MockInterpreterPort::new(),
                host: MockHostProbePort::new(),
                git: MockGitPort::new(),
                clock: MockClockPort::new(),
            }
        }

        fn builder(self) -> ReportBuilder {
            ReportBuilder::new(
                ReportPorts {
                    interpreter: Arc::new(self.interpreter),
                    host: Arc::new(self.host),
                    git: Arc::new(self.git),
                    clock: Arc::new(self.clock),
                },
                "2.1.0",
            )
        }
    }

    #[test]
    fn test_default_report_has_three_sections() {
        let mut mocks = Mocks::new();
        mocks.clock.expect_now().times(1).returning(fixed_now);
        mocks
            .interpreter
            .expect_python_info()
            .times(1)
            .returning(|| Ok(python_info()));
        mocks.host.expect_host_info().times(1).returning(host_info);

        let report = mocks.builder().build(&WatermarkOptions::default()).unwrap();

        assert_eq!(report.len(), 3);
        let sections = report.sections();
        assert_eq!(
            sections[0].get("Last updated"),
            Some("2024-01-02T03:04:05+00:00")
        );
        assert_eq!(sections[1].get("Python version"), Some("3.11.4"));
        assert_eq!(sections[1].get("IPython version"), Some("8.14.0"));
        assert_eq!(sections[2].get("Compiler"), Some("GCC 11.4.0"));
        assert_eq!(sections[2].get("CPU cores"), Some("8"));
        assert_eq!(sections[2].get("Architecture"), Some("64bit"));
    }

    #[test]
    fn test_default_report_survives_missing_interpreter() {
        let mut mocks = Mocks::new();
        mocks.clock.expect_now().returning(fixed_now);
        mocks
            .interpreter
            .expect_python_info()
            .returning(|| Err(InterpreterError::NotFound("python3, python".into())));
        mocks.host.expect_host_info().returning(host_info);

        let report = mocks.builder().build(&WatermarkOptions::default()).unwrap();

        assert_eq!(report.len(), 3);
        assert_eq!(
            report.sections()[1].get("Python version"),
            Some("not installed")
        );
        assert_eq!(report.sections()[2].get("Compiler"), None);
        assert_eq!(report.sections()[2].get("OS"), Some("Linux"));
    }

    #[test]
    fn test_ipython_omitted_when_not_installed() {
        let mut mocks = Mocks::new();
        mocks.interpreter.expect_python_info().returning(|| {
            Ok(PythonInfo {
                ipython: VersionLookup::NotInstalled,
                ..python_info()
            })
        });

        let options = WatermarkOptions {
            python: true,
            ..Default::default()
        };
        let report = mocks.builder().build(&options).unwrap();

        assert_eq!(report.len(), 1);
        assert_eq!(report.sections()[0].len(), 2);
        assert_eq!(report.sections()[0].get("IPython version"), None);
    }

    #[test]
    fn test_sections_follow_declared_order() {
        let mut mocks = Mocks::new();
        mocks.clock.expect_now().returning(fixed_now);
        mocks
            .interpreter
            .expect_python_info()
            .times(1)
            .returning(|| Ok(python_info()));
        mocks
            .interpreter
            .expect_package_versions()
            .returning(|reqs| Ok(vec![VersionLookup::Found("1.0".into()); reqs.len()]));
        mocks.host.expect_host_info().times(1).returning(host_info);
        mocks
            .git
            .expect_query()
            .returning(|q| Ok(format!("{q:?}").to_lowercase()));

        let options = WatermarkOptions {
            author: Some("Ada".into()),
            current_date: true,
            python: true,
            packages: Some("numpy".into()),
            hostname: true,
            machine: true,
            githash: true,
            gitrepo: true,
            gitbranch: true,
            watermark: true,
            iversions: vec!["pandas".into()],
            ..Default::default()
        };
        let report = mocks.builder().build(&options).unwrap();

        let first_keys: Vec<&str> = report
            .sections()
            .iter()
            .map(|s| s.iter().next().unwrap().0)
            .collect();
        assert_eq!(
            first_keys,
            vec![
                "Author",
                "Last updated",
                "Python implementation",
                "numpy",
                "Compiler",
                "Hostname",
                "Git hash",
                "Git repo",
                "Git branch",
                "pandas",
                "Watermark",
            ]
        );
        assert_eq!(report.sections()[1].get("Last updated"), Some("2024-01-02"));
        assert_eq!(report.sections()[6].get("Git hash"), Some("commithash"));
        assert_eq!(report.sections()[10].get("Watermark"), Some("2.1.0"));
    }

    #[test]
    fn test_packages_mix_found_and_missing() {
        let mut mocks = Mocks::new();
        mocks
            .interpreter
            .expect_package_versions()
            .withf(|reqs| reqs.len() == 2 && reqs[1].name == "not_a_real_pkg")
            .returning(|_| {
                Ok(vec![
                    VersionLookup::Found("1.26.4".into()),
                    VersionLookup::NotInstalled,
                ])
            });

        let options = WatermarkOptions {
            packages: Some("numpy,not_a_real_pkg".into()),
            ..Default::default()
        };
        let report = mocks.builder().build(&options).unwrap();

        let section = &report.sections()[0];
        assert_eq!(section.len(), 2);
        assert_eq!(section.get("numpy"), Some("1.26.4"));
        assert_eq!(section.get("not_a_real_pkg"), Some("not installed"));
    }

    #[test]
    fn test_package_lookup_failure_is_soft() {
        let mut mocks = Mocks::new();
        mocks.interpreter.expect_package_versions().returning(|_| {
            Err(InterpreterError::MalformedOutput("garbage".into()))
        });

        let options = WatermarkOptions {
            packages: Some("numpy,scipy".into()),
            ..Default::default()
        };
        let report = mocks.builder().build(&options).unwrap();

        assert_eq!(report.sections()[0].get("numpy"), Some("not installed"));
        assert_eq!(report.sections()[0].get("scipy"), Some("not installed"));
    }

    #[test]
    fn test_imported_versions_keep_only_found() {
        let mut mocks = Mocks::new();
        mocks
            .interpreter
            .expect_package_versions()
            .withf(|reqs| {
                let names: Vec<&str> = reqs.iter().map(|r| r.name.as_str()).collect();
                names == ["mystery", "numpy", "pandas"]
            })
            .returning(|_| {
                Ok(vec![
                    VersionLookup::Unknown,
                    VersionLookup::Found("1.26.4".into()),
                    VersionLookup::Found("2.2.0".into()),
                ])
            });

        let options = WatermarkOptions {
            iversions: vec![
                "pandas.core".into(),
                "numpy".into(),
                "builtins".into(),
                "numpy.linalg".into(),
                "mystery".into(),
            ],
            ..Default::default()
        };
        let report = mocks.builder().build(&options).unwrap();

        let section = &report.sections()[0];
        let entries: Vec<(&str, &str)> = section.iter().collect();
        assert_eq!(entries, vec![("numpy", "1.26.4"), ("pandas", "2.2.0")]);
    }

    #[test]
    fn test_imported_versions_with_nothing_found_adds_no_section() {
        let mut mocks = Mocks::new();
        mocks
            .interpreter
            .expect_package_versions()
            .returning(|reqs| Ok(vec![VersionLookup::NotInstalled; reqs.len()]));

        let options = WatermarkOptions {
            iversions: vec!["ghost".into()],
            watermark: true,
            ..Default::default()
        };
        let report = mocks.builder().build(&options).unwrap();

        assert_eq!(report.len(), 1);
        assert_eq!(report.sections()[0].get("Watermark"), Some("2.1.0"));
    }

    #[test]
    fn test_git_failure_reported_as_unavailable() {
        let mut mocks = Mocks::new();
        mocks.git.expect_query().returning(|q| {
            Err(GitError::Failed {
                args: q.args().join(" "),
                status: "exit status: 128".into(),
                stderr: "fatal: not a git repository".into(),
            })
        });

        let options = WatermarkOptions {
            githash: true,
            gitbranch: true,
            ..Default::default()
        };
        let report = mocks.builder().build(&options).unwrap();

        assert_eq!(report.len(), 2);
        assert_eq!(report.sections()[0].get("Git hash"), Some(GIT_UNAVAILABLE));
        assert_eq!(report.sections()[1].get("Git branch"), Some(GIT_UNAVAILABLE));
    }

    #[test]
    fn test_invalid_custom_time_rejected() {
        for pattern in ["%Y-%!", "%#z"] {
            let mocks = Mocks::new();
            let options = WatermarkOptions {
                custom_time: Some(pattern.into()),
                ..Default::default()
            };

            let result = mocks.builder().build(&options);
            assert!(matches!(result, Err(CoreError::Validation(_))), "{pattern}");
        }
    }

    #[test]
    fn test_hostname_only_probes_host() {
        let mut mocks = Mocks::new();
        mocks.host.expect_host_info().times(1).returning(host_info);

        let options = WatermarkOptions {
            hostname: true,
            ..Default::default()
        };
        let report = mocks.builder().build(&options).unwrap();

        assert_eq!(report.len(), 1);
        assert_eq!(report.sections()[0].get("Hostname"), Some("lab-01"));
    }
}
