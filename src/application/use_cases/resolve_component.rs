use crate::application::dto::ScanResult;
use crate::ports::inbound::ComponentResolutionPort;
use crate::ports::outbound::ProgressReporter;
use crate::resolution::domain::{ComponentInfo, QrPayload};
use crate::resolution::services::{QrInterpreter, ResolverRegistry};
use crate::shared::ResolveResult;

/// ComponentResolutionService - Core use case for code resolution
///
/// Owns the resolver registry and the QR interpreter built at startup and
/// exposes them through [`ComponentResolutionPort`]. The service holds no
/// per-call state; share it behind `Arc` to serve concurrent callers.
pub struct ComponentResolutionService {
    registry: ResolverRegistry,
    interpreter: QrInterpreter,
}

impl ComponentResolutionService {
    /// Creates the service with the built-in QR formats
    pub fn new(registry: ResolverRegistry) -> Self {
        Self::with_interpreter(registry, QrInterpreter::new())
    }

    pub fn with_interpreter(registry: ResolverRegistry, interpreter: QrInterpreter) -> Self {
        Self {
            registry,
            interpreter,
        }
    }

    /// Platforms that recognize the code, in dispatch order
    pub fn matching_platforms(&self, code: &str) -> Vec<String> {
        self.registry.matching_platforms(code)
    }

    /// Resolves a code, reporting progress and ambiguity to the reporter
    ///
    /// When several platforms recognize the code a warning names them all;
    /// dispatch still goes to the first one.
    ///
    /// # Errors
    /// Returns the resolution failure after reporting it
    pub fn resolve_with_progress<PR: ProgressReporter>(
        &self,
        code: &str,
        reporter: &PR,
    ) -> ResolveResult<ComponentInfo> {
        let code = code.trim();
        let platforms = self.matching_platforms(code);
        if platforms.len() > 1 {
            reporter.report_error(&format!(
                "⚠️  Warning: '{}' matches several platforms ({}); using {}",
                code,
                platforms.join(", "),
                platforms[0]
            ));
        }

        if let Some(platform) = platforms.first() {
            reporter.start_activity(&format!("🔎 Resolving {} on {}...", code, platform));
        }

        match self.resolve_code(code) {
            Ok(component) => {
                reporter.report_completion(&format!(
                    "✅ Resolved {} on {}",
                    component.platform_code(),
                    component.platform_name()
                ));
                Ok(component)
            }
            Err(e) => {
                reporter.report_error(&format!("❌ Could not resolve '{}'", code));
                Err(e)
            }
        }
    }

    /// Scan flow with progress: interprets the payload, reports what was
    /// read, then resolves the carried code
    ///
    /// # Errors
    /// Returns the first failure of either step
    pub fn scan_with_progress<PR: ProgressReporter>(
        &self,
        raw: &str,
        reporter: &PR,
    ) -> ResolveResult<ScanResult> {
        let payload = self.interpret_qr_payload(raw)?;
        reporter.report(&format!(
            "📷 {} payload: {} × {}",
            payload.platform(),
            payload.code(),
            payload.quantity()
        ));
        let component = self.resolve_with_progress(payload.code(), reporter)?;
        Ok(ScanResult::new(component, payload))
    }
}

impl ComponentResolutionPort for ComponentResolutionService {
    fn resolve_code(&self, code: &str) -> ResolveResult<ComponentInfo> {
        self.registry.resolve(code)
    }

    fn interpret_qr_payload(&self, raw: &str) -> ResolveResult<QrPayload> {
        self.interpreter.interpret(raw)
    }

    fn list_supported_platforms(&self) -> Vec<String> {
        self.registry.list_platforms()
    }
}
