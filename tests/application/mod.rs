mod conversation_context_test;
mod recognition_ladder_test;
mod response_engine_test;
