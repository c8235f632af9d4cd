mod http_tts_synthesizer_test;
