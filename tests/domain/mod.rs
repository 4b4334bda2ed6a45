mod feedback_view_test;
