pub const TRACES: &str = r#"
name: traces
version: v0.1.0
components:
  - name: otlp_in
    kind: OTelReceiver
    style: receiver
    ports:
      - name: Traces
        direction: Output
        type: OTelTraces
      - name: Logs
        direction: Output
        type: OTelLogs
  - name: sampler
    kind: DeterministicSampler
    style: processor
    properties:
      SampleRate: 10
  - name: honeycomb
    kind: HoneycombExporter
    style: exporter
    ports:
      - name: Traces
        direction: Input
      - name: Logs
        direction: Input
  - name: debug_out
    kind: DebugExporter
    style: exporter
connections:
  - source: { component: otlp_in, port: Traces, type: OTelTraces }
    destination: { component: sampler, port: In }
  - source: { component: sampler, port: Out }
    destination: { component: honeycomb, port: Traces }
  - source: { component: otlp_in, port: Logs }
    destination: { component: honeycomb, port: Logs }
layout:
  components:
    - name: sampler
      position: { x: 500, y: 500 }
      size: { width: 240, height: 100 }
"#;
