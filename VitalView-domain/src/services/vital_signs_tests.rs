#[cfg(test)]
mod vital_signs_tests {
    use std::sync::Arc;

    use crate::entities::{HistoryFilter, VitalSignStatus, VitalSignType, VitalSignValue};
    use crate::services::{VitalSignsService, VitalSignsServiceError};
    use crate::testing::{
        fixture_repository, reading, seeded_repository, MockVitalSignsRepository, FIXTURE_ALERTS,
    };
    use vital_view_data::models::patient::seed_patients;
    use vital_view_data::repository::VitalSignsRepository;

    fn fixture_service() -> VitalSignsService<VitalSignsRepository> {
        VitalSignsService::new(Arc::new(fixture_repository()))
    }

    #[test]
    fn test_get_patient_by_id() {
        let service = fixture_service();
        assert_eq!(service.get_patient_by_id("4").unwrap().patient_id, "P-10004");
        assert!(service.get_patient_by_id("42").is_none());
    }

    #[test]
    fn test_get_patient_vital_signs_unknown_is_empty() {
        let service = fixture_service();
        assert_eq!(service.get_patient_vital_signs("1").len(), 6);
        assert!(service.get_patient_vital_signs("4").is_empty());
        assert!(service.get_patient_vital_signs("nope").is_empty());
    }

    #[test]
    fn test_latest_supersedes_older_critical() {
        let service = fixture_service();
        let latest = service.get_latest_vital_signs("1");
        assert_eq!(latest.len(), 5);
        assert_eq!(latest[&VitalSignType::HeartRate].value, VitalSignValue::Numeric(72.0));
        assert!(latest.values().all(|s| s.status == VitalSignStatus::Normal));
    }

    #[test]
    fn test_alert_counts_fixture() {
        let service = fixture_service();
        assert_eq!(service.get_alert_counts(), FIXTURE_ALERTS);
    }

    #[test]
    fn test_search_patients() {
        let service = fixture_service();

        assert_eq!(service.search_patients("").len(), 5);
        assert_eq!(service.search_patients("  ").len(), 5);
        assert_eq!(service.search_patients(" marie ").len(), 1);

        let by_first = service.search_patients("MARIE");
        assert_eq!(by_first.len(), 1);
        assert_eq!(by_first[0].id, "2");

        let by_last = service.search_patients("ifri");
        assert_eq!(by_last[0].id, "3");

        let by_display = service.search_patients("p-10005");
        assert_eq!(by_display[0].id, "5");

        // "co" hits "con" and "corbeil"
        assert_eq!(service.search_patients("co").len(), 2);
        assert!(service.search_patients("zzz").is_empty());
    }

    #[test]
    fn test_filter_history_newest_first() {
        let service = fixture_service();
        let rows = service.filter_history(&HistoryFilter::default());
        assert_eq!(rows.len(), 13);
        assert!(rows.windows(2).all(|w| w[0].sign.timestamp >= w[1].sign.timestamp));
        assert_eq!(rows.last().unwrap().sign.id, "temp-5-2");
    }

    #[test]
    fn test_filter_history_applies_every_filter() {
        let service = fixture_service();
        let filter = HistoryFilter {
            patient_id: Some("2".to_string()),
            kind: None,
            status: Some(VitalSignStatus::Warning),
        };
        let rows = service.filter_history(&filter);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.patient_name == "Marie sansnom"));

        let filter = HistoryFilter {
            kind: Some(VitalSignType::HeartRate),
            status: Some(VitalSignStatus::Critical),
            ..Default::default()
        };
        let rows = service.filter_history(&filter);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].sign.id, "hr-1-1");
    }

    #[test]
    fn test_filter_history_unknown_patient_name() {
        let repository = MockVitalSignsRepository::new()
            .with_patients(seed_patients())
            .with_readings(vec![reading("77", VitalSignType::HeartRate, VitalSignValue::Numeric(70.0), 0)]);
        let service = VitalSignsService::new(Arc::new(repository));

        let rows = service.filter_history(&HistoryFilter::default());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].patient_name, "Unknown");
    }

    #[test]
    fn test_chart_series_oldest_first() {
        let service = VitalSignsService::new(Arc::new(seeded_repository(5, 7)));
        let points = service.chart_series("3", VitalSignType::Temperature);
        assert_eq!(points.len(), 7);
        assert!(points.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
        assert_eq!(points.last().unwrap().date, "07/03");

        assert!(service.chart_series("3", VitalSignType::BloodPressure).is_empty());
        assert_eq!(service.blood_pressure_series("3").len(), 7);
    }

    #[test]
    fn test_patient_detail() {
        let service = fixture_service();
        let detail = service.patient_detail("3").unwrap();
        assert_eq!(detail.patient.first_name, "Thomas");
        assert_eq!(detail.latest.len(), 3);
        assert_eq!(detail.blood_pressure.len(), 1);
        assert_eq!(detail.blood_pressure[0].systolic, 190);
        assert_eq!(detail.respiratory_rate.len(), 1);
        assert!(detail.heart_rate.is_empty());

        assert!(matches!(
            service.patient_detail("404"),
            Err(VitalSignsServiceError::PatientNotFound(id)) if id == "404"
        ));
    }

    #[test]
    fn test_dashboard_summary() {
        let service = fixture_service();
        let summary = service.dashboard_summary();

        assert_eq!(summary.total_patients, 5);
        assert_eq!(summary.alerts, FIXTURE_ALERTS);
        assert_eq!(summary.total_alerts, 4);

        let ids: Vec<&str> = summary.attention.iter().map(|a| a.patient_id.as_str()).collect();
        assert_eq!(ids, vec!["3", "2"]);
        assert_eq!(summary.attention[0].status, VitalSignStatus::Critical);

        assert_eq!(summary.activity.len(), 3);
        assert_eq!(summary.activity[2].heart_rate, Some((72.0 + 105.0) / 2.0));
    }

    #[test]
    fn test_generated_dataset_latest_totals() {
        let service = VitalSignsService::new(Arc::new(seeded_repository(99, 7)));
        let mut normal = 0;
        for patient in service.search_patients("") {
            normal += service
                .get_latest_vital_signs(&patient.id)
                .values()
                .filter(|s| s.status == VitalSignStatus::Normal)
                .count();
        }
        let counts = service.get_alert_counts();
        assert_eq!(counts.warning + counts.critical + normal, 25);
    }
}
