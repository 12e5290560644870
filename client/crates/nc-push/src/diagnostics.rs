use crate::PushError;

use nc_core::Platform;

/// Setup advice for a push failure, shown in logs and the diagnostics view.
pub fn failure_hint(platform: Platform, error: &PushError) -> Option<&'static str> {
    match error {
        PushError::NotPhysicalDevice { .. } => {
            Some("Simulators and emulators cannot receive push tokens; use a physical device")
        }
        PushError::PermissionNotGranted { .. } => {
            Some("Notifications are disabled for the app; enable them in system settings")
        }
        PushError::TokenAcquisition { message, .. } => Some(match platform {
            Platform::Ios if message.contains("aps-environment") => {
                "The build lacks the aps-environment entitlement; enable the Push Notifications capability and re-sign"
            }
            Platform::Ios => "Check the APNs key and the provisioning profile of the build",
            Platform::Android
                if message.contains("FirebaseApp") || message.contains("google-services") =>
            {
                "Firebase is not initialized; bundle google-services.json with the Android build"
            }
            Platform::Android => "Check the FCM configuration of the Android build",
        }),
        PushError::InvalidToken { .. } => None,
    }
}
