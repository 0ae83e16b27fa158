use static_assertions::assert_impl_all;
use syslog_emitter::{EventPayload, SyslogConfig, SyslogEmitter, SyslogFormatter};

#[test]
fn emitter_types_are_send() {
    assert_impl_all!(SyslogEmitter: Send);
    assert_impl_all!(SyslogFormatter: Send, Sync);
    assert_impl_all!(SyslogConfig: Send, Sync);
    assert_impl_all!(EventPayload: Send, Sync);
}
