#[cfg(test)]
mod dashboard_tests {
    use vital_view_data::models::patient::seed_patients;
    use vital_view_domain::entities::{VitalSignType, VitalSignValue};
    use vital_view_domain::services::create_mock_vital_signs_service;
    use vital_view_domain::testing::{fixture_readings, reading, MockVitalSignsRepository};

    use crate::views::handlers::{get_alerts, get_dashboard};

    #[test]
    fn test_alerts_on_empty_dataset() {
        let service = create_mock_vital_signs_service(MockVitalSignsRepository::new().with_patients(seed_patients()));

        let alerts = get_alerts(&service);
        assert_eq!(alerts.total, 0);
        assert_eq!(alerts.message, "All vital signs normal");
    }

    #[test]
    fn test_single_alert_message() {
        let service = create_mock_vital_signs_service(
            MockVitalSignsRepository::new()
                .with_patients(seed_patients())
                .with_readings(vec![reading("4", VitalSignType::OxygenSaturation, VitalSignValue::Numeric(89.0), 0)]),
        );

        let alerts = get_alerts(&service);
        assert_eq!((alerts.warning, alerts.critical), (0, 1));
        assert_eq!(alerts.message, "1 active alert");
    }

    #[test]
    fn test_dashboard_message_matches_counts() {
        let service = create_mock_vital_signs_service(
            MockVitalSignsRepository::new()
                .with_patients(seed_patients())
                .with_readings(fixture_readings()),
        );

        let dashboard = get_dashboard(&service);
        assert_eq!(dashboard.message, "4 active alerts");
        assert_eq!(dashboard.summary.total_alerts, 4);
        assert_eq!(dashboard.summary.activity.len(), 3);

        let json = serde_json::to_value(&dashboard).unwrap();
        assert_eq!(json["message"], "4 active alerts");
        assert_eq!(json["total_patients"], 5);
    }
}
