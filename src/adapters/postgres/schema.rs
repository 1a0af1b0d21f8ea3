//! Diesel schema for project, task, and worker persistence.

diesel::table! {
    /// Project records.
    projects (id) {
        /// Internal project identifier.
        id -> BigInt,
        /// Unique project code.
        #[max_length = 255]
        code -> Varchar,
        /// Project name.
        #[max_length = 255]
        name -> Varchar,
        /// Optional project description.
        description -> Nullable<Text>,
    }
}

diesel::table! {
    /// Worker records.
    workers (id) {
        /// Internal worker identifier.
        id -> BigInt,
        /// Unique email address.
        #[max_length = 255]
        email -> Varchar,
        /// Optional first name.
        #[max_length = 255]
        first_name -> Nullable<Varchar>,
        /// Optional last name.
        #[max_length = 255]
        last_name -> Nullable<Varchar>,
    }
}

diesel::table! {
    /// Task records referencing their project and optional assignee.
    tasks (id) {
        /// Internal task identifier.
        id -> BigInt,
        /// Immutable public task UUID.
        uuid -> Uuid,
        /// Task name.
        #[max_length = 255]
        name -> Varchar,
        /// Optional task description.
        description -> Nullable<Text>,
        /// Optional due date.
        due_date -> Nullable<Date>,
        /// Lifecycle status.
        #[max_length = 50]
        status -> Varchar,
        /// Owning project identifier.
        project_id -> BigInt,
        /// Optional assignee identifier.
        assignee_id -> Nullable<BigInt>,
        /// Optional effort estimate in hours.
        estimated_hours -> Nullable<Integer>,
    }
}

diesel::joinable!(tasks -> projects (project_id));
diesel::joinable!(tasks -> workers (assignee_id));

diesel::allow_tables_to_appear_in_same_query!(projects, tasks, workers);
