pub mod subject_id;
