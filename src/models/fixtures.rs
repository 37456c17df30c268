//! Bundled mock data shown by the dashboard.
//!
//! The values are hand-authored; nothing here is measured.

use serde::Serialize;

use super::{
    HistoricalPoint, MonitoringMetrics, PerformanceMetrics, Project, ProjectId, ProjectMetrics,
    QualityCharacteristic, Rating, ReliabilityMetrics, SecurityMetrics, StaticAnalysisSnapshot,
    SubCharacteristic, ToolIntegration, ToolStatus, Trend,
};

/// Everything the dashboard can display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    pub projects: Vec<Project>,
    pub characteristics: Vec<QualityCharacteristic>,
    pub static_analysis: StaticAnalysisSnapshot,
    pub history: Vec<HistoricalPoint>,
    pub tools: Vec<ToolIntegration>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The bundled mock catalog.
    pub fn builtin() -> Self {
        Self {
            projects: builtin_projects(),
            characteristics: builtin_characteristics(),
            static_analysis: builtin_static_analysis(),
            history: builtin_history(),
            tools: builtin_tools(),
        }
    }

    /// Look up a project by identifier.
    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn builtin_projects() -> Vec<Project> {
    vec![
        Project {
            id: ProjectId::EcommercePlatform,
            name: "E-Commerce Platform".to_string(),
            last_scan: "2025-11-06 14:30".to_string(),
            overall_score: 82,
            trend: Trend::Up,
            metrics: ProjectMetrics {
                performance: PerformanceMetrics {
                    response_time_ms: 245,
                    requests_per_second: 1250,
                    error_rate: 0.05,
                    cpu_usage: 65,
                    memory_usage: 72,
                    active_users: 3420,
                },
                reliability: ReliabilityMetrics {
                    uptime: 99.98,
                    mean_time_to_recover: 15,
                    failure_rate: 0.02,
                    availability_last_24h: 100.0,
                },
                security: SecurityMetrics {
                    vulnerabilities_high: 2,
                    vulnerabilities_medium: 8,
                    vulnerabilities_low: 15,
                    security_score: 85,
                    last_pen_test: "2025-10-15".to_string(),
                },
                monitoring: MonitoringMetrics {
                    alerts_last_24h: 5,
                    incidents_open: 2,
                    mttr: 45,
                    dashboards: strings(&[
                        "Performance Overview",
                        "User Transactions",
                        "Infrastructure Health",
                    ]),
                },
            },
        },
        Project {
            id: ProjectId::MobileBanking,
            name: "Mobile Banking App".to_string(),
            last_scan: "2025-11-06 10:15".to_string(),
            overall_score: 76,
            trend: Trend::Down,
            metrics: ProjectMetrics {
                performance: PerformanceMetrics {
                    response_time_ms: 180,
                    requests_per_second: 850,
                    error_rate: 0.08,
                    cpu_usage: 78,
                    memory_usage: 85,
                    active_users: 1850,
                },
                reliability: ReliabilityMetrics {
                    uptime: 99.95,
                    mean_time_to_recover: 22,
                    failure_rate: 0.03,
                    availability_last_24h: 99.8,
                },
                security: SecurityMetrics {
                    vulnerabilities_high: 4,
                    vulnerabilities_medium: 12,
                    vulnerabilities_low: 23,
                    security_score: 78,
                    last_pen_test: "2025-10-28".to_string(),
                },
                monitoring: MonitoringMetrics {
                    alerts_last_24h: 12,
                    incidents_open: 4,
                    mttr: 65,
                    dashboards: strings(&[
                        "API Performance",
                        "Security Metrics",
                        "User Authentication",
                    ]),
                },
            },
        },
        Project {
            id: ProjectId::InventorySystem,
            name: "Inventory Management System".to_string(),
            last_scan: "2025-11-05 16:45".to_string(),
            overall_score: 88,
            trend: Trend::Up,
            metrics: ProjectMetrics {
                performance: PerformanceMetrics {
                    response_time_ms: 120,
                    requests_per_second: 450,
                    error_rate: 0.02,
                    cpu_usage: 45,
                    memory_usage: 58,
                    active_users: 780,
                },
                reliability: ReliabilityMetrics {
                    uptime: 99.99,
                    mean_time_to_recover: 12,
                    failure_rate: 0.01,
                    availability_last_24h: 100.0,
                },
                security: SecurityMetrics {
                    vulnerabilities_high: 1,
                    vulnerabilities_medium: 5,
                    vulnerabilities_low: 12,
                    security_score: 92,
                    last_pen_test: "2025-11-01".to_string(),
                },
                monitoring: MonitoringMetrics {
                    alerts_last_24h: 2,
                    incidents_open: 1,
                    mttr: 30,
                    dashboards: strings(&[
                        "Stock Levels",
                        "Warehouse Operations",
                        "System Health",
                    ]),
                },
            },
        },
    ]
}

fn characteristic(
    name: &str,
    value: u8,
    color: &str,
    subchars: &[(&str, u8, &str)],
) -> QualityCharacteristic {
    QualityCharacteristic {
        name: name.to_string(),
        value,
        subchars: subchars
            .iter()
            .map(|(name, value, source)| SubCharacteristic {
                name: name.to_string(),
                value: *value,
                source: source.to_string(),
            })
            .collect(),
        color: color.to_string(),
    }
}

fn builtin_characteristics() -> Vec<QualityCharacteristic> {
    vec![
        characteristic(
            "Functional Suitability",
            85,
            "#3b82f6",
            &[
                ("Functional Completeness", 88, "Requirements Analysis"),
                ("Functional Correctness", 82, "Unit Tests"),
                ("Functional Appropriateness", 85, "User Validation"),
            ],
        ),
        characteristic(
            "Performance Efficiency",
            78,
            "#10b981",
            &[
                ("Time Behaviour", 75, "JMeter"),
                ("Resource Utilization", 80, "Prometheus"),
                ("Capacity", 79, "Load Testing"),
            ],
        ),
        characteristic(
            "Compatibility",
            82,
            "#f59e0b",
            &[
                ("Co-existence", 85, "Docker Tests"),
                ("Interoperability", 79, "API Testing"),
            ],
        ),
        characteristic(
            "Usability",
            88,
            "#8b5cf6",
            &[
                ("Appropriateness Recognizability", 90, "UX Analytics"),
                ("Learnability", 87, "User Testing"),
                ("Operability", 89, "Hotjar Heatmaps"),
                ("User Error Protection", 86, "Error Tracking"),
                ("User Interface Aesthetics", 88, "Design Review"),
                ("Accessibility", 85, "WAVE Audit"),
            ],
        ),
        characteristic(
            "Reliability",
            80,
            "#ef4444",
            &[
                ("Maturity", 82, "Production Logs"),
                ("Availability", 85, "Uptime Monitor"),
                ("Fault Tolerance", 78, "Chaos Engineering"),
                ("Recoverability", 75, "DR Testing"),
            ],
        ),
        characteristic(
            "Security",
            75,
            "#ec4899",
            &[
                ("Confidentiality", 78, "Penetration Test"),
                ("Integrity", 80, "OWASP ZAP"),
                ("Non-repudiation", 72, "Audit Logs"),
                ("Accountability", 75, "Security Scan"),
                ("Authenticity", 73, "Auth Testing"),
            ],
        ),
        characteristic(
            "Maintainability",
            84,
            "#06b6d4",
            &[
                ("Modularity", 88, "SonarQube"),
                ("Reusability", 82, "Code Analysis"),
                ("Analysability", 85, "SonarQube"),
                ("Modifiability", 83, "Complexity Metrics"),
                ("Testability", 86, "Coverage Report"),
            ],
        ),
        characteristic(
            "Portability",
            79,
            "#14b8a6",
            &[
                ("Adaptability", 82, "Multi-platform Tests"),
                ("Installability", 80, "Deploy Automation"),
                ("Replaceability", 75, "Migration Tests"),
            ],
        ),
    ]
}

fn builtin_static_analysis() -> StaticAnalysisSnapshot {
    StaticAnalysisSnapshot {
        bugs: 23,
        vulnerabilities: 8,
        code_smells: 145,
        coverage: 78.5,
        duplications: 3.2,
        technical_debt: "15d 4h".to_string(),
        reliability_rating: Rating::B,
        security_rating: Rating::C,
        maintainability_rating: Rating::A,
        lines_of_code: 45320,
        complexity: 2847,
    }
}

fn builtin_history() -> Vec<HistoricalPoint> {
    [
        ("May", 75, 45, 72.0),
        ("Jun", 77, 38, 74.0),
        ("Jul", 79, 32, 76.0),
        ("Aug", 80, 28, 77.0),
        ("Sep", 81, 25, 78.0),
        ("Oct", 82, 23, 78.5),
    ]
    .into_iter()
    .map(|(month, score, bugs, coverage)| HistoricalPoint {
        month: month.to_string(),
        score,
        bugs,
        coverage,
    })
    .collect()
}

fn builtin_tools() -> Vec<ToolIntegration> {
    [
        (
            "SonarQube",
            "2 min ago",
            &["Code Quality", "Security", "Maintainability"][..],
        ),
        ("JMeter", "15 min ago", &["Performance", "Load Testing"][..]),
        ("OWASP ZAP", "1 hour ago", &["Security Vulnerabilities"][..]),
        ("Selenium", "30 min ago", &["Functional Testing"][..]),
        ("Prometheus", "5 min ago", &["Resource Monitoring"][..]),
        ("Jest/JUnit", "10 min ago", &["Unit Test Coverage"][..]),
        ("Lighthouse", "45 min ago", &["Performance", "Accessibility"][..]),
        ("ESLint", "3 min ago", &["Code Style", "Best Practices"][..]),
    ]
    .into_iter()
    .map(|(name, last_sync, metrics)| ToolIntegration {
        name: name.to_string(),
        status: ToolStatus::Active,
        last_sync: last_sync.to_string(),
        metrics: strings(metrics),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_project_id_has_a_project() {
        let catalog = Catalog::builtin();
        for id in ProjectId::ALL {
            let project = catalog.project(id).unwrap();
            assert_eq!(project.id, id);
        }
        assert_eq!(catalog.projects.len(), ProjectId::ALL.len());
    }

    #[test]
    fn test_scores_are_bounded() {
        let catalog = Catalog::builtin();
        for project in &catalog.projects {
            assert!(project.overall_score <= 100);
            assert!(project.metrics.security.security_score <= 100);
            assert!(project.metrics.performance.cpu_usage <= 100);
            assert!(project.metrics.performance.memory_usage <= 100);
            assert!(project.metrics.reliability.uptime <= 100.0);
        }
        for c in &catalog.characteristics {
            assert!(c.value <= 100);
            assert!(c.subchars.iter().all(|s| s.value <= 100));
        }
    }

    #[test]
    fn test_eight_characteristics_with_distinct_values() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.characteristics.len(), 8);
        let mut values: Vec<u8> = catalog.characteristics.iter().map(|c| c.value).collect();
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), 8);
    }

    #[test]
    fn test_history_is_chronological() {
        let catalog = Catalog::builtin();
        let months: Vec<&str> = catalog.history.iter().map(|p| p.month.as_str()).collect();
        assert_eq!(months, ["May", "Jun", "Jul", "Aug", "Sep", "Oct"]);
    }

    #[test]
    fn test_inventory_fixture_values() {
        let catalog = Catalog::builtin();
        let project = catalog.project(ProjectId::InventorySystem).unwrap();
        assert_eq!(project.overall_score, 88);
        assert_eq!(project.metrics.reliability.uptime, 99.99);
        assert_eq!(project.metrics.performance.response_time_ms, 120);
    }
}
