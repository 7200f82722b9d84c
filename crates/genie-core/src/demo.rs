//! Sample project description used by the `demo` entry points.

pub const SAMPLE_DESCRIPTION: &str = "The system should allow users to register and login securely.
Users can create and manage their projects.
Each project can have multiple tasks with deadlines.
Admins can view reports and manage all users.
The system should send notifications for upcoming deadlines.
Users can upload files and attach them to tasks.
The database should store all project and task information.
Users can search and filter their tasks by status or date.";
