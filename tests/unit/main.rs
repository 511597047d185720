// Test code is allowed to panic on failure
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

//! Unit tests for etcd-operator.
//!
//! These tests run without a Kubernetes cluster and verify the pure parts
//! of the controller: topology planning, resource generation, label
//! isolation between clusters and the watch frame mapping.
//!
//! ```bash
//! cargo test --test unit
//! ```

mod plan_tests {
    use etcd_operator::plan::plan;

    #[test]
    fn test_plan_returns_exactly_n_members() {
        for size in 1..=7 {
            let plan = plan("c", size).unwrap();
            assert_eq!(plan.members.len(), size as usize);
        }
    }

    #[test]
    fn test_example_scenario_from_three_member_cluster() {
        let plan = plan("test", 3).unwrap();

        let names: Vec<&str> = plan.members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["test-0000", "test-0001", "test-0002"]);
        assert_eq!(
            plan.initial_cluster,
            "test-0000=http://test-0000:2380,test-0001=http://test-0001:2380,test-0002=http://test-0002:2380"
        );
    }

    #[test]
    fn test_member_naming_is_injective_across_clusters() {
        let a = plan("alpha", 3).unwrap();
        let b = plan("beta", 3).unwrap();
        for (m_a, m_b) in a.members.iter().zip(&b.members) {
            assert_ne!(m_a.name, m_b.name);
        }
    }

    #[test]
    fn test_plan_rejects_non_positive_size() {
        assert!(plan("c", 0).is_err());
        assert!(plan("c", -1).is_err());
    }
}

mod resource_tests {
    use etcd_operator::plan::plan;
    use etcd_operator::resources::pod::generate_member_pod;
    use etcd_operator::resources::service::generate_member_service;
    use etcd_operator::resources::{cluster_selector, member_labels};

    /// Check a label map against the exact key/value selector used for
    /// decommissioning.
    fn matches_selector(
        labels: &std::collections::BTreeMap<String, String>,
        selector: &str,
    ) -> bool {
        let (key, value) = selector.split_once('=').unwrap();
        labels.get(key).map(String::as_str) == Some(value)
    }

    #[test]
    fn test_provisioned_objects_match_their_cluster_selector() {
        let plan = plan("test", 3).unwrap();
        let selector = cluster_selector("test");

        for member in &plan.members {
            let svc = generate_member_service(member, "test");
            let pod = generate_member_pod(member, "test", &plan.initial_cluster);

            assert!(matches_selector(&svc.metadata.labels.unwrap(), &selector));
            assert!(matches_selector(&pod.metadata.labels.unwrap(), &selector));
        }
    }

    #[test]
    fn test_deletion_is_label_isolated() {
        // Objects of cluster "other" must never match the selector for
        // cluster "test", even with an equal member count.
        let other = plan("other", 3).unwrap();
        let selector = cluster_selector("test");

        for member in &other.members {
            let svc = generate_member_service(member, "other");
            let pod = generate_member_pod(member, "other", &other.initial_cluster);

            assert!(!matches_selector(&svc.metadata.labels.unwrap(), &selector));
            assert!(!matches_selector(&pod.metadata.labels.unwrap(), &selector));
        }
    }

    #[test]
    fn test_service_selector_targets_single_member() {
        let plan = plan("test", 2).unwrap();
        let svc = generate_member_service(&plan.members[0], "test");

        let selector = svc.spec.unwrap().selector.unwrap();
        assert_eq!(selector, member_labels("test", "test-0000"));
        assert_ne!(selector, member_labels("test", "test-0001"));
    }

    #[test]
    fn test_every_pod_carries_the_shared_initial_cluster() {
        let plan = plan("test", 3).unwrap();

        for member in &plan.members {
            let pod = generate_member_pod(member, "test", &plan.initial_cluster);
            let spec = pod.spec.unwrap();
            let command = spec.containers[0].command.as_ref().unwrap();

            let pos = command.iter().position(|a| a == "--initial-cluster").unwrap();
            assert_eq!(command[pos + 1], plan.initial_cluster);
        }
    }
}

mod watch_tests {
    use etcd_operator::controller::watch::ChangeEvent;
    use etcd_operator::EtcdCluster;
    use kube::api::WatchEvent;

    fn decode_frame(frame: &str) -> WatchEvent<EtcdCluster> {
        serde_json::from_str(frame).unwrap()
    }

    #[test]
    fn test_added_and_deleted_frames_dispatch_in_order() {
        let added = decode_frame(
            r#"{"type": "ADDED", "object": {
                "apiVersion": "coreos.com/v1", "kind": "EtcdCluster",
                "metadata": {"name": "test"}, "spec": {"size": 3}}}"#,
        );
        let deleted = decode_frame(
            r#"{"type": "DELETED", "object": {
                "apiVersion": "coreos.com/v1", "kind": "EtcdCluster",
                "metadata": {"name": "test"}, "spec": {"size": 3}}}"#,
        );

        let first = ChangeEvent::from_watch_event(added).unwrap().unwrap();
        let second = ChangeEvent::from_watch_event(deleted).unwrap().unwrap();

        assert!(matches!(first, ChangeEvent::Added(_)));
        assert!(matches!(second, ChangeEvent::Deleted(_)));
        assert_eq!(first.cluster_name(), Some("test"));
        assert_eq!(second.cluster_name(), Some("test"));
    }

    #[test]
    fn test_modified_frames_are_not_dispatched() {
        let modified = decode_frame(
            r#"{"type": "MODIFIED", "object": {
                "apiVersion": "coreos.com/v1", "kind": "EtcdCluster",
                "metadata": {"name": "test"}, "spec": {"size": 5}}}"#,
        );
        assert!(ChangeEvent::from_watch_event(modified).unwrap().is_none());
    }

    #[test]
    fn test_malformed_frame_fails_to_decode() {
        let result: Result<WatchEvent<EtcdCluster>, _> =
            serde_json::from_str(r#"{"type": "ADDED", "object": {"spec": {"size": "three"}}}"#);
        assert!(result.is_err());
    }
}

mod error_tests {
    use etcd_operator::controller::error::Error;

    #[test]
    fn test_stream_errors_terminate_the_loop() {
        assert!(Error::StreamClosed.is_fatal());
        assert!(Error::Decode("truncated frame".to_string()).is_fatal());
    }

    #[test]
    fn test_per_resource_errors_do_not_terminate_the_loop() {
        assert!(!Error::InvalidSpec("size must be at least 1".to_string()).is_fatal());
        assert!(!Error::MissingField("metadata.name").is_fatal());
    }
}
