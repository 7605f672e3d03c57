use async_trait::async_trait;
use blockdex::Transport;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Scripted transport: serves a canned body (or failure) and counts calls so
/// tests can assert when the network was, and was not, touched. Clones share
/// state, so tests keep a handle after the client takes ownership.
#[derive(Clone)]
pub struct FakeTransport {
    response: Arc<Mutex<Result<String, String>>>,
    calls: Arc<AtomicUsize>,
}

impl FakeTransport {
    pub fn serving(body: impl Into<String>) -> Self {
        Self {
            response: Arc::new(Mutex::new(Ok(body.into()))),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            response: Arc::new(Mutex::new(Err(message.into()))),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Swap what subsequent fetches return.
    pub fn set_response(&self, response: Result<String, String>) {
        let mut guard = self.response.lock().unwrap_or_else(|err| err.into_inner());
        *guard = response;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn fetch_text(&self, _url: &str) -> anyhow::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let guard = self.response.lock().unwrap_or_else(|err| err.into_inner());
        match &*guard {
            Ok(body) => Ok(body.clone()),
            Err(message) => Err(anyhow::anyhow!("{message}")),
        }
    }
}

/// Fixture manifest mirroring the shape of the public blocks endpoint:
/// three blocks covering direct kind tags, anyOf-only kind tags, and the
/// two-property sorted case.
pub fn fixture_manifest() -> String {
    serde_json::json!({
        "blocks": [
            {
                "manifest_type_identifier": "roboflow_core/roboflow_object_detection_model@v1",
                "manifest_type_identifier_aliases": ["roboflow_core/object_detection_model@v1"],
                "human_friendly_block_name": "Object Detection Model",
                "block_source": "workflows_core",
                "block_schema": {
                    "short_description": "Predict the location of objects with bounding boxes.",
                    "properties": {
                        "images": {
                            "title": "Image",
                            "kind": [{
                                "name": "image",
                                "description": "Image in workflows",
                                "docs": null,
                                "serialised_data_type": "dict"
                            }]
                        },
                        "model_id": {
                            "type": "string",
                            "anyOf": [
                                {"type": "string"},
                                {
                                    "kind": [{"name": "roboflow_model_id"}],
                                    "pattern": "^\\$inputs.[A-Za-z_0-9\\-]+$",
                                    "reference": true,
                                    "selected_element": "workflow_parameter",
                                    "type": "string"
                                }
                            ]
                        },
                        "confidence": {"type": "number", "default": 0.4, "ge": 0.0, "le": 1.0}
                    }
                },
                "outputs_manifest": [
                    {"name": "predictions", "kind": [{"name": "object_detection_prediction"}]}
                ]
            },
            {
                "manifest_type_identifier": "roboflow_core/polygon_visualization@v1",
                "block_schema": {
                    "short_description": "Draws a polygon around detected objects in an image.",
                    "properties": {
                        "color_palette": {
                            "type": "string",
                            "default": "DEFAULT",
                            "kind": [{"name": "string"}]
                        },
                        "color_axis": {
                            "type": "string",
                            "default": "CLASS",
                            "anyOf": [
                                {"type": "string"},
                                {
                                    "kind": [{"name": "string"}],
                                    "reference": true,
                                    "selected_element": "workflow_parameter",
                                    "type": "string"
                                }
                            ]
                        },
                        "thickness": {"type": "integer", "default": 2}
                    }
                }
            },
            {
                "manifest_type_identifier": "roboflow_core/dynamic_crop@v1",
                "block_schema": {
                    "short_description": "Crop an image around detections.",
                    "properties": {
                        "predictions": {
                            "anyOf": [
                                {
                                    "kind": [
                                        {"name": "object_detection_prediction"},
                                        {"name": "instance_segmentation_prediction"}
                                    ],
                                    "reference": true,
                                    "selected_element": "step_output",
                                    "type": "string"
                                }
                            ]
                        }
                    }
                }
            }
        ]
    })
    .to_string()
}
